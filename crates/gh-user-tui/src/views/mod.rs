//! Views
//!
//! ratatui rendering only; which sub-state renders and with which message
//! is decided by the view models.

pub mod search_view;
pub mod status_bar;
pub mod user_list_view;

use crate::state::AppState;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Render the whole application
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Search input form
        Constraint::Min(0),    // Results and repository panels
        Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

    search_view::render(state, chunks[0], frame);
    user_list_view::render(state, chunks[1], frame);
    status_bar::render(state, chunks[2], frame);
}
