//! Dashboard view rendering.
//!
//! Renders one dashboard: the progress ring, the two metric rows with trend
//! indicators, and the score trend sparkline. All content comes from the
//! [`DisplayModel`](crate::data::DisplayModel) - this module never touches
//! raw snapshot fields.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{IndicatorDirection, MetricRow};

use super::ring;

/// Sparkline characters (8 levels of height).
const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const UP_ARROW: &str = "▲";
const DOWN_ARROW: &str = "▼";

/// Render the current dashboard.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let msg = if let Some(ref err) = app.load_error {
            format!("No data: {}", err)
        } else {
            "Waiting for data...".to_string()
        };
        let paragraph = Paragraph::new(msg)
            .centered()
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(paragraph, area);
        return;
    };

    let model = data.display(app.current);
    let accent = app.theme.accent(app.current);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(format!(" {} ", app.current.label()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(7),    // Ring
        Constraint::Length(2), // Metric rows
        Constraint::Length(1), // Sparkline
    ])
    .split(inner);

    ring::render(frame, chunks[0], &model, accent, &app.theme);
    render_rows(frame, app, chunks[1], &model.rows);
    render_sparkline(frame, app, chunks[2]);
}

/// Render the metric rows side by side beneath the ring.
fn render_rows(frame: &mut Frame, app: &App, area: Rect, rows: &[MetricRow]) {
    if rows.is_empty() {
        return;
    }
    let columns =
        Layout::horizontal(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()]).split(area);

    for (row, column) in rows.iter().zip(columns.iter()) {
        let arrow = match row.direction {
            IndicatorDirection::Up => UP_ARROW,
            IndicatorDirection::Down => DOWN_ARROW,
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(row.title, Style::default().add_modifier(Modifier::DIM)),
                Span::raw(" "),
                Span::styled(arrow, app.theme.direction_style(row.direction)),
            ]),
            Line::from(Span::styled(
                row.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), *column);
    }
}

/// Render the score history sparkline for the current dashboard.
fn render_sparkline(frame: &mut Frame, app: &App, area: Rect) {
    let levels = app.history.score_sparkline(app.current);
    if levels.len() < 2 {
        return;
    }

    let spark: String = levels
        .iter()
        .rev()
        .take(area.width.saturating_sub(8) as usize)
        .rev()
        .map(|&l| SPARKLINE_CHARS[usize::from(l.min(7))])
        .collect();

    let line = Line::from(vec![
        Span::styled("trend ", Style::default().add_modifier(Modifier::DIM)),
        Span::styled(spark, Style::default().fg(app.theme.accent(app.current))),
    ]);
    frame.render_widget(Paragraph::new(line).centered(), area);
}
