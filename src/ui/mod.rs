//! Terminal rendering using ratatui.
//!
//! The rendering layer consumes only the display models produced by
//! [`crate::data::present`] plus application state - it is a swappable
//! surface over the same immutable snapshot contract.

pub mod common;
pub mod dashboard;
pub mod ring;
pub mod theme;

pub use theme::Theme;
