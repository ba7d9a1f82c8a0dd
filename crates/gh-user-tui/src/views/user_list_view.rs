//! Result list with expandable user rows and repository panels

use crate::state::{AppState, Focus};
use crate::theme::Theme;
use crate::view_models::{
    derive_repo_panel, derive_search_content, description_line, RepoPanelContent, SearchContent,
};
use gh_user_client::{GitHubRepository, QueryState};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the content area below the search form
pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let theme = Theme::default();
    let mut lines: Vec<Line> = Vec::new();

    match derive_search_content(&state.search) {
        SearchContent::Idle => {}
        SearchContent::Fetching => {
            lines.push(Line::from(Span::styled("Searching…", theme.dim)));
        }
        SearchContent::Error(message) => {
            lines.push(Line::from(Span::styled(message, theme.error)));
        }
        SearchContent::Empty(message) => {
            lines.push(Line::from(Span::styled(message, theme.dim)));
        }
        SearchContent::Data { header, users } => {
            lines.push(Line::from(Span::styled(header, theme.accent)));
            lines.push(Line::default());

            for (index, user) in users.iter().enumerate() {
                let expanded = state.repositories.is_expanded(user.id);
                let selected = state.focus == Focus::Results && index == state.search.selected;
                let row_style = if selected {
                    theme.highlight
                } else {
                    Style::default()
                };
                let meta_style = if selected { theme.highlight } else { theme.dim };

                let chevron = if expanded { "▾" } else { "▸" };
                let mut spans = vec![
                    Span::styled(format!(" {} ", chevron), row_style),
                    Span::styled(
                        user.login.clone(),
                        row_style.add_modifier(Modifier::BOLD),
                    ),
                ];
                if let Some(kind) = &user.account_type {
                    spans.push(Span::styled(format!("  ({})", kind), meta_style));
                }
                spans.push(Span::styled(format!("  {}", user.html_url), meta_style));
                lines.push(Line::from(spans));

                if expanded {
                    push_repo_panel(
                        &mut lines,
                        state.repositories.panel(&user.login),
                        &theme,
                    );
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn push_repo_panel(
    lines: &mut Vec<Line>,
    panel: Option<&QueryState<Vec<GitHubRepository>>>,
    theme: &Theme,
) {
    match derive_repo_panel(panel) {
        RepoPanelContent::Loading => {
            lines.push(indented("Loading repositories...".to_string(), theme.dim));
        }
        RepoPanelContent::Error(message) => {
            lines.push(indented(message, theme.error));
        }
        RepoPanelContent::Empty => {
            lines.push(indented("No repositories found".to_string(), theme.dim));
        }
        RepoPanelContent::Data(repos) => {
            for repo in repos {
                lines.push(Line::from(vec![
                    Span::raw("     "),
                    Span::styled(
                        repo.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  ★ {}", repo.stargazers_count), theme.accent),
                ]));
                if let Some(description) = description_line(repo) {
                    lines.push(indented(format!("  {}", description), theme.dim));
                }
            }
        }
    }
    lines.push(Line::default());
}

fn indented(text: String, style: Style) -> Line<'static> {
    Line::from(vec![Span::raw("     "), Span::styled(text, style)])
}
