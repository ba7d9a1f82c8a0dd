//! Middleware system
//!
//! Middleware sits between action dispatch and reducer execution, allowing
//! side effects, logging, and event translation to be handled in a
//! composable way.
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod github;
pub mod keyboard;
pub mod logging;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the main loop; long-running work (API calls) is
/// spawned onto a runtime and re-enters the chain via the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
