//! Character-cell circular progress ring.
//!
//! Draws the ring the widget way: a background track, an optional
//! target-zone band behind the arc, and the progress arc itself, filled
//! clockwise starting from the 12 o'clock position. The score and heading
//! sit in the ring's center.
//!
//! Terminal cells are roughly twice as tall as they are wide, so column
//! distances are halved to keep the ring round on screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::data::DisplayModel;

use super::theme::Theme;

const PROGRESS_CHAR: char = '█';
const TARGET_CHAR: char = '▒';
const TRACK_CHAR: char = '░';

/// Horizontal cell-aspect correction: one row spans about two columns.
const CELL_ASPECT: f64 = 2.0;

/// What a ring cell represents, in paint order (progress wins over the
/// target band, which wins over the track).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Progress,
    Target,
    Track,
}

/// Fraction of the ring circumference, clockwise from 12 o'clock, for the
/// cell offset `(dx, dy)` from the ring center. Result is in [0, 1).
fn angle_fraction(dx: f64, dy: f64) -> f64 {
    // atan2(dx, -dy) is 0 at the top and grows clockwise
    let angle = dx.atan2(-dy);
    let angle = if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    };
    angle / std::f64::consts::TAU
}

/// Classify a ring cell by its position fraction against the model's arc and
/// target zone.
fn classify(fraction: f64, arc: f64, target_zone: Option<(f64, f64)>) -> CellKind {
    if fraction < arc {
        return CellKind::Progress;
    }
    if let Some((lo, hi)) = target_zone {
        if fraction >= lo && fraction < hi {
            return CellKind::Target;
        }
    }
    CellKind::Track
}

/// Render the progress ring with centered score text into the given area.
pub fn render(frame: &mut Frame, area: Rect, model: &DisplayModel, accent: Color, theme: &Theme) {
    let width = area.width as usize;
    let height = area.height as usize;

    // Too small for a ring - fall back to plain text
    if height < 7 || width < 15 {
        let line = Line::from(vec![
            Span::styled(
                format!("{}% ", model.score as u64),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(model.heading, Style::default().add_modifier(Modifier::DIM)),
        ]);
        frame.render_widget(Paragraph::new(line).centered(), area);
        return;
    }

    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let r_outer = (height as f64 / 2.0).min(width as f64 / (2.0 * CELL_ASPECT)) - 0.2;
    let r_inner = r_outer - 1.3;

    let mut grid: Vec<Vec<(char, Style)>> = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let dx = (col as f64 - cx) / CELL_ASPECT;
                    let dy = row as f64 - cy;
                    let radius = (dx * dx + dy * dy).sqrt();
                    if radius < r_inner || radius > r_outer {
                        return (' ', Style::default());
                    }
                    let fraction = angle_fraction(dx, dy);
                    match classify(fraction, model.arc, model.target_zone) {
                        CellKind::Progress => (PROGRESS_CHAR, Style::default().fg(accent)),
                        CellKind::Target => (
                            TARGET_CHAR,
                            Style::default().fg(accent).add_modifier(Modifier::DIM),
                        ),
                        CellKind::Track => (TRACK_CHAR, Style::default().fg(theme.track)),
                    }
                })
                .collect()
        })
        .collect();

    // Centered score and heading inside the ring
    let score_text = format!("{}%", model.score as u64);
    stamp(
        &mut grid,
        height / 2 - 1,
        &score_text,
        Style::default().add_modifier(Modifier::BOLD),
    );
    stamp(
        &mut grid,
        height / 2,
        model.heading,
        Style::default().add_modifier(Modifier::DIM),
    );

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Write `text` horizontally centered into the grid row.
fn stamp(grid: &mut [Vec<(char, Style)>], row: usize, text: &str, style: Style) {
    let Some(cells) = grid.get_mut(row) else {
        return;
    };
    let width = cells.len();
    let chars: Vec<char> = text.chars().collect();
    if chars.len() >= width {
        return;
    }
    let start = (width - chars.len()) / 2;
    for (i, ch) in chars.into_iter().enumerate() {
        cells[start + i] = (ch, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_angle_fraction_cardinal_points() {
        // 12 o'clock
        assert!(angle_fraction(0.0, -1.0).abs() < EPS);
        // 3 o'clock (quarter turn clockwise)
        assert!((angle_fraction(1.0, 0.0) - 0.25).abs() < EPS);
        // 6 o'clock
        assert!((angle_fraction(0.0, 1.0) - 0.5).abs() < EPS);
        // 9 o'clock
        assert!((angle_fraction(-1.0, 0.0) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_angle_fraction_in_range() {
        for i in 0..360 {
            let theta = f64::from(i).to_radians();
            let f = angle_fraction(theta.sin(), -theta.cos());
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_classify_progress_wins_over_target() {
        // A cell inside both the arc and the target zone shows progress
        assert_eq!(
            classify(0.55, 0.6, Some((0.5, 0.6))),
            CellKind::Progress
        );
        // Past the arc, inside the zone
        assert_eq!(classify(0.55, 0.4, Some((0.5, 0.6))), CellKind::Target);
        // Past both
        assert_eq!(classify(0.7, 0.4, Some((0.5, 0.6))), CellKind::Track);
    }

    #[test]
    fn test_classify_empty_and_full_arc() {
        // Zero arc fills nothing
        assert_eq!(classify(0.0, 0.0, None), CellKind::Track);
        // Full arc fills everything
        assert_eq!(classify(0.999, 1.0, None), CellKind::Progress);
    }

    #[test]
    fn test_stamp_centers_text() {
        let mut grid = vec![vec![(' ', Style::default()); 10]];
        stamp(&mut grid, 0, "40%", Style::default());
        let rendered: String = grid[0].iter().map(|(ch, _)| *ch).collect();
        assert_eq!(rendered, "   40%    ");
    }

    #[test]
    fn test_stamp_skips_oversized_text() {
        let mut grid = vec![vec![(' ', Style::default()); 4]];
        stamp(&mut grid, 0, "too long", Style::default());
        let rendered: String = grid[0].iter().map(|(ch, _)| *ch).collect();
        assert_eq!(rendered, "    ");
    }
}
