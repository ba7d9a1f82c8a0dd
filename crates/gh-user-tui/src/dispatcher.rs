//! Dispatcher for middleware action dispatch
//!
//! When middleware or a spawned fetch task needs to dispatch actions, it
//! uses the Dispatcher. Dispatched actions are queued on the main loop's
//! channel and re-enter the middleware chain on the next iteration, which
//! also prevents recursion.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher over the main loop's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for processing through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
