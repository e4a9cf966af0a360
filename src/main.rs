// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod data;
mod events;
mod source;
mod ui;

use app::App;
use source::{BuiltinSource, FileSource, MetricSource, StreamSource};

#[derive(Parser, Debug)]
#[command(name = "vitalwatch")]
#[command(about = "Terminal dashboard for personal health metrics (strain, recovery, sleep)")]
struct Args {
    /// Path to a vitals JSON file to poll (defaults to the builtin snapshot)
    #[arg(short, long, conflicts_with = "connect")]
    file: Option<PathBuf>,

    /// Connect to a TCP endpoint for live snapshots (host:port)
    #[arg(short, long, conflicts_with = "file")]
    connect: Option<String>,

    /// Refresh interval in seconds (file and builtin modes)
    #[arg(short, long, default_value = "1")]
    refresh: u64,

    /// Age in seconds after which the displayed snapshot is flagged stale
    #[arg(long, default_value = "120")]
    stale_after: u64,

    /// Export current state to JSON file and exit
    #[arg(short, long, conflicts_with = "connect")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let stale_after = Duration::from_secs(args.stale_after);

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(args.file.as_deref(), &export_path, stale_after);
    }

    // Handle TCP connection mode
    if let Some(ref addr) = args.connect {
        return run_with_tcp(addr, stale_after);
    }

    let source: Box<dyn MetricSource> = match args.file {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => Box::new(BuiltinSource::new()),
    };
    run_tui(source, stale_after, Duration::from_secs(args.refresh))
}

/// Run with a TCP stream data source
fn run_with_tcp(addr: &str, stale_after: Duration) -> Result<()> {
    // Build a tokio runtime for the TCP connection
    let rt = tokio::runtime::Runtime::new()?;

    let source = rt.block_on(async {
        use tokio::net::TcpStream;

        println!("Connecting to {}...", addr);
        match TcpStream::connect(addr).await {
            Ok(stream) => {
                println!("Connected!");
                Ok(Box::new(StreamSource::spawn(stream, addr)) as Box<dyn MetricSource>)
            }
            Err(e) => Err(anyhow::anyhow!("Failed to connect to {}: {}", addr, e)),
        }
    })?;

    // For TCP, we poll continuously (no refresh interval needed)
    run_tui(source, stale_after, Duration::from_millis(100))
}

/// Run the TUI with the given data source
fn run_tui(
    source: Box<dyn MetricSource>,
    stale_after: Duration,
    refresh_interval: Duration,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, stale_after);
    let _ = app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 40;
    const MIN_HEIGHT: u16 = 14;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let y = (area.height / 2).saturating_sub(2);
                let centered = ratatui::layout::Rect::new(0, y, area.width, 5).intersection(area);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(10),   // Dashboard content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with scores at a glance
            ui::common::render_header(frame, app, chunks[0]);

            // Render tabs
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current dashboard
            ui::dashboard::render(frame, app, chunks[2]);

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Auto-refresh data periodically
        if last_refresh.elapsed() >= refresh_interval {
            let _ = app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Export current state to a JSON file without starting the TUI
fn export_to_file(
    vitals_path: Option<&std::path::Path>,
    export_path: &std::path::Path,
    stale_after: Duration,
) -> Result<()> {
    let source: Box<dyn MetricSource> = match vitals_path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BuiltinSource::new()),
    };

    let mut app = App::new(source, stale_after);
    app.reload_data()?;

    if app.data.is_none() {
        let detail = app
            .load_error
            .clone()
            .unwrap_or_else(|| "source produced no snapshot".to_string());
        anyhow::bail!("cannot export: {}", detail);
    }

    app.export_state(export_path)?;
    println!("Exported vitals to: {}", export_path.display());
    Ok(())
}
