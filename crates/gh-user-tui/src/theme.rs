//! Shared styles
//!
//! One place for the handful of styles the views share, so the UI reads
//! consistently without a full theming system.

use ratatui::style::{Color, Style};

/// Style palette for the views
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Headers, active controls
    pub accent: Style,
    /// Secondary text: hints, placeholders, descriptions
    pub dim: Style,
    /// Failure messages
    pub error: Style,
    /// The row under the cursor
    pub highlight: Style,
    /// Unfocused panel borders
    pub border: Style,
    /// Focused panel borders
    pub border_focused: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Style::default().fg(Color::Cyan),
            dim: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            highlight: Style::default().fg(Color::Black).bg(Color::Cyan),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
        }
    }
}
