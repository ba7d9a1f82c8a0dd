//! Actions module
//!
//! All state transitions and side effects flow through actions. Raw key
//! events enter as `Action::Key` and are translated to semantic actions by
//! the keyboard middleware; fetch lifecycle actions are dispatched by the
//! GitHub middleware and its spawned tasks.

pub mod global;
pub mod repository;
pub mod search;

pub use global::GlobalAction;
pub use repository::RepositoryAction;
pub use search::SearchAction;

use ratatui::crossterm::event::KeyEvent;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw keyboard event; consumed by the keyboard middleware
    Key(KeyEvent),
    /// Application-wide actions
    Global(GlobalAction),
    /// Search flow actions
    Search(SearchAction),
    /// Repository panel actions
    Repository(RepositoryAction),
}
