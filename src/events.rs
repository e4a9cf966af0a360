use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::data::Dashboard;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Dashboard switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),

        // Direct dashboard access
        KeyCode::Char('1') => app.set_view(Dashboard::Strain),
        KeyCode::Char('2') => app.set_view(Dashboard::Recovery),
        KeyCode::Char('3') => app.set_view(Dashboard::Sleep),

        // Left/right cycle dashboards
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),

        // Reload
        KeyCode::Char('r') => {
            let _ = app.reload_data();
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from("vitals_export.json");
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BuiltinSource;

    fn test_app() -> App {
        App::new(Box::new(BuiltinSource::new()), Duration::from_secs(120))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::from(code));
    }

    #[test]
    fn test_quit_key() {
        let mut app = test_app();
        assert!(app.running);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_tab_cycles_dashboards() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current, Dashboard::Recovery);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current, Dashboard::Strain);
    }

    #[test]
    fn test_number_keys_select_dashboard() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current, Dashboard::Sleep);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current, Dashboard::Recovery);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.current, Dashboard::Strain);
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.show_help);
    }

    #[test]
    fn test_reload_key_polls_source() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('r'));
        assert!(app.data.is_some());
    }
}
