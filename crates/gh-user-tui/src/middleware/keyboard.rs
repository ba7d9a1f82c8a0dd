//! Keyboard middleware
//!
//! Converts raw keyboard events into semantic actions, depending on which
//! panel has focus. The raw event is consumed; only translated actions
//! reach the reducer.

use crate::actions::{Action, GlobalAction, RepositoryAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Focus};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Key(key) = action {
            handle_key_event(key, state, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        // Pass all other actions through
        true
    }
}

/// Handle a key event and dispatch semantic actions
fn handle_key_event(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    // Ctrl-C quits regardless of focus
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        return;
    }

    match state.focus {
        Focus::Input => handle_input_key(key, state, dispatcher),
        Focus::Results => handle_results_key(key, state, dispatcher),
    }
}

fn handle_input_key(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Enter => {
            // The submit control is disabled while a search is in flight
            if !state.search.submit_disabled() {
                dispatcher.dispatch(Action::Search(SearchAction::Submitted {
                    query: state.search.input.trim().to_string(),
                }));
            }
        }
        KeyCode::Backspace => {
            dispatcher.dispatch(Action::Search(SearchAction::InputBackspace));
        }
        KeyCode::Tab | KeyCode::Down => {
            dispatcher.dispatch(Action::Global(GlobalAction::FocusNext));
        }
        KeyCode::Esc => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Search(SearchAction::InputChar(c)));
        }
        _ => {}
    }
}

fn handle_results_key(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Char('j') | KeyCode::Down => {
            dispatcher.dispatch(Action::Search(SearchAction::NavigateNext));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            dispatcher.dispatch(Action::Search(SearchAction::NavigatePrevious));
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(user) = state.search.selected_user() {
                dispatcher.dispatch(Action::Repository(RepositoryAction::Toggled {
                    user_id: user.id,
                    login: user.login.clone(),
                }));
            }
        }
        KeyCode::Char('r') => {
            dispatcher.dispatch(Action::Search(SearchAction::Refresh));
        }
        KeyCode::Tab | KeyCode::Char('/') => {
            dispatcher.dispatch(Action::Global(GlobalAction::FocusNext));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_query_cache::{QueryState, QueryStatus};
    use gh_user_client::GitHubUser;
    use std::sync::mpsc::{channel, Receiver};
    use url::Url;

    fn dispatcher() -> (Dispatcher, Receiver<Action>) {
        let (tx, rx) = channel();
        (Dispatcher::new(tx), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn user(id: u64, login: &str) -> GitHubUser {
        GitHubUser {
            id,
            login: login.to_string(),
            avatar_url: Url::parse(&format!("https://avatars.githubusercontent.com/u/{}", id))
                .unwrap(),
            html_url: Url::parse(&format!("https://github.com/{}", login)).unwrap(),
            account_type: None,
        }
    }

    #[test]
    fn test_enter_submits_the_trimmed_input() {
        let (dispatcher, rx) = dispatcher();
        let mut state = AppState::default();
        state.search.input = "  octocat  ".to_string();

        handle_key_event(&press(KeyCode::Enter), &state, &dispatcher);

        match rx.try_recv().unwrap() {
            Action::Search(SearchAction::Submitted { query }) => assert_eq!(query, "octocat"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_enter_is_ignored_while_fetching() {
        let (dispatcher, rx) = dispatcher();
        let mut state = AppState::default();
        state.search.input = "octocat".to_string();
        state.search.result.is_fetching = true;

        handle_key_event(&press(KeyCode::Enter), &state, &dispatcher);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_typing_reaches_the_input() {
        let (dispatcher, rx) = dispatcher();
        let state = AppState::default();

        handle_key_event(&press(KeyCode::Char('o')), &state, &dispatcher);

        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Search(SearchAction::InputChar('o'))
        ));
    }

    #[test]
    fn test_enter_toggles_the_selected_row_in_results_focus() {
        let (dispatcher, rx) = dispatcher();
        let mut state = AppState::default();
        state.focus = Focus::Results;
        state.search.result = QueryState {
            status: QueryStatus::Success,
            data: Some(vec![user(7, "octocat")]),
            error: None,
            is_fetching: false,
        };

        handle_key_event(&press(KeyCode::Enter), &state, &dispatcher);

        match rx.try_recv().unwrap() {
            Action::Repository(RepositoryAction::Toggled { user_id, login }) => {
                assert_eq!(user_id, 7);
                assert_eq!(login, "octocat");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_q_quits_in_results_focus_but_types_in_input_focus() {
        let (dispatcher, rx) = dispatcher();
        let mut state = AppState::default();
        state.focus = Focus::Results;
        handle_key_event(&press(KeyCode::Char('q')), &state, &dispatcher);
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Global(GlobalAction::Quit)
        ));

        state.focus = Focus::Input;
        handle_key_event(&press(KeyCode::Char('q')), &state, &dispatcher);
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Search(SearchAction::InputChar('q'))
        ));
    }

    #[test]
    fn test_ctrl_c_quits_in_any_focus() {
        let (dispatcher, rx) = dispatcher();
        let mut state = AppState::default();
        state.focus = Focus::Input;

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key_event(&key, &state, &dispatcher);

        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Global(GlobalAction::Quit)
        ));
    }

    #[test]
    fn test_r_refreshes_in_results_focus() {
        let (dispatcher, rx) = dispatcher();
        let mut state = AppState::default();
        state.focus = Focus::Results;

        handle_key_event(&press(KeyCode::Char('r')), &state, &dispatcher);

        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Search(SearchAction::Refresh)
        ));
    }
}
