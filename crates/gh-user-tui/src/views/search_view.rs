//! Search input form

use crate::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Render the search form: a bordered input with a submit hint that dims
/// while a search fetch is in flight
pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let theme = Theme::default();
    let focused = state.focus == Focus::Input;

    let border_style = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let submit_style = if state.search.submit_disabled() {
        theme.dim
    } else {
        theme.accent
    };

    let block = Block::bordered()
        .title(" Search GitHub users ")
        .title_bottom(Line::from(Span::styled(" Search ⏎ ", submit_style)).right_aligned())
        .border_style(border_style);

    let content = if state.search.input.is_empty() {
        Line::from(Span::styled("Enter username...", theme.dim))
    } else {
        let mut spans = vec![Span::raw(state.search.input.clone())];
        if focused {
            spans.push(Span::styled("█", theme.accent));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}
