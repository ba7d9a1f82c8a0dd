//! Redux-style Store that holds application state and dispatches actions
//!
//! The Store follows the Redux pattern:
//! - Centralized state management
//! - Actions are dispatched to modify state
//! - Pure reducers handle state transitions
//! - Middleware handles side effects before actions reach the reducer

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::AppState;

/// Application store: state plus the middleware chain
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    /// Create a new store with initial state
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    /// Add middleware before starting the event loop.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    /// Get immutable reference to current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action through the middleware chain, then the reducer
    ///
    /// A middleware that returns `false` consumes the action; it never
    /// reaches the reducer.
    pub fn dispatch(&mut self, action: Action, dispatcher: &Dispatcher) {
        let mut should_continue = true;
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, dispatcher) {
                should_continue = false;
                break;
            }
        }

        if should_continue {
            self.state = reduce(self.state.clone(), &action);
        }
    }

    /// Apply an action to the reducer directly, bypassing middleware
    ///
    /// Useful in tests and for transitions with no side effects.
    pub fn apply(&mut self, action: Action) {
        self.state = reduce(self.state.clone(), &action);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
