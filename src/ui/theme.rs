//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::{Dashboard, IndicatorDirection};

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for the strain ring.
    pub strain: Color,
    /// Accent color for the recovery ring.
    pub recovery: Color,
    /// Accent color for the sleep ring.
    pub sleep: Color,
    /// Color for the unfilled ring track.
    pub track: Color,
    /// Color for above-baseline indicators.
    pub up: Color,
    /// Color for at-or-below-baseline indicators.
    pub down: Color,
    /// Color for the stale-data marker.
    pub stale: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for headings.
    pub header: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            strain: Color::Rgb(255, 149, 0),
            recovery: Color::Rgb(52, 199, 89),
            sleep: Color::Rgb(175, 82, 222),
            track: Color::DarkGray,
            up: Color::Rgb(10, 132, 255),
            down: Color::Rgb(255, 149, 0),
            stale: Color::Yellow,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            strain: Color::Rgb(235, 113, 0),
            recovery: Color::Rgb(0, 155, 58),
            sleep: Color::Rgb(140, 60, 190),
            track: Color::Gray,
            up: Color::Rgb(0, 100, 220),
            down: Color::Rgb(235, 113, 0),
            stale: Color::Yellow,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Accent color for a dashboard's ring.
    pub fn accent(&self, dashboard: Dashboard) -> Color {
        match dashboard {
            Dashboard::Strain => self.strain,
            Dashboard::Recovery => self.recovery,
            Dashboard::Sleep => self.sleep,
        }
    }

    /// Style for a trend indicator.
    pub fn direction_style(&self, direction: IndicatorDirection) -> Style {
        let color = match direction {
            IndicatorDirection::Up => self.up,
            IndicatorDirection::Down => self.down,
        };
        Style::default().fg(color)
    }
}
