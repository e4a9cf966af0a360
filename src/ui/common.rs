//! Common UI components shared across dashboards.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::data::Dashboard;

/// Render the header bar with the three scores at a glance.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(
                " VITALWATCH ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("| Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let (dot_style, stale_marker) = if app.is_stale() {
        (Style::default().fg(app.theme.stale), " STALE")
    } else {
        (Style::default().fg(app.theme.recovery), "")
    };

    let mut spans = vec![
        Span::styled(" ● ", dot_style),
        Span::styled("VITALWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
    ];

    for dashboard in Dashboard::all() {
        let model = data.display(dashboard);
        spans.push(Span::styled(
            format!("{}% ", model.score as u64),
            Style::default()
                .fg(app.theme.accent(dashboard))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!("{} │ ", model.heading)));
    }

    spans.push(Span::raw(format!(
        "{}↑ {}↓",
        data.elevated_count(),
        data.lowered_count()
    )));

    if !stale_marker.is_empty() {
        spans.push(Span::styled(
            stale_marker,
            Style::default()
                .fg(app.theme.stale)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing the three dashboards.
///
/// Highlights the currently active dashboard.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Dashboard::all()
        .iter()
        .enumerate()
        .map(|(i, d)| Line::from(format!(" {}:{} ", i + 1, d.label())))
        .collect();

    let selected = match app.current {
        Dashboard::Strain => 0,
        Dashboard::Recovery => 1,
        Dashboard::Sleep => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, age of the displayed snapshot, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.recovery));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref data) = app.data {
        let elapsed = data.last_updated.elapsed();
        let freshness = if app.is_stale() {
            format!("STALE ({:.0}s old)", elapsed.as_secs_f64())
        } else {
            format!("Updated {:.1}s ago", elapsed.as_secs_f64())
        };
        format!(
            " {} | {} | Tab:switch r:refresh e:export ?:help q:quit",
            app.source_description(),
            freshness,
        )
    } else if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Dashboards",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab/S-Tab   Next/previous dashboard"),
        Line::from("  ←/→ h/l     Switch dashboards"),
        Line::from("  1/2/3       Strain / Recovery / Sleep"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Refresh data"),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 17u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
