//! Status bar: key hints on the left, cache counters on the right

use crate::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the status bar
pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let theme = Theme::default();

    let hints = match state.focus {
        Focus::Input => "Enter search · Tab results · Esc quit",
        Focus::Results => "j/k move · Enter expand · r refresh · Tab input · q quit",
    };

    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {}", hints), theme.dim))),
        chunks[0],
    );

    if let Some(stats) = &state.cache_stats {
        let label = format!("cache: {} hits / {} misses ", stats.hits, stats.misses);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, theme.dim))).right_aligned(),
            chunks[1],
        );
    }
}
