//! Events emitted by the engine and the observers that receive them.
//!
//! The engine never renders or persists anything itself. Everything a
//! front end needs to know arrives here, once per transition.

use super::{Move, Outcome};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use tracing::debug;

/// Something that happened in the live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A placement was accepted.
    MoveApplied(Move),
    /// The game reached a terminal outcome.
    GameOver(Outcome),
}

/// Receives engine events.
pub trait GameObserver {
    /// Called once for every event, in order.
    fn notify(&mut self, event: &GameEvent);
}

/// Collects events into a shared list.
///
/// Clones share the same list, so one handle can be given to the engine
/// and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events seen so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the events seen so far.
    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(*event);
    }
}

/// Forwards events into an mpsc channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::Sender<GameEvent>,
}

impl ChannelObserver {
    /// Wraps the sending half of a channel.
    pub fn new(tx: mpsc::Sender<GameEvent>) -> Self {
        Self { tx }
    }

    /// Creates an observer and the receiver it feeds.
    pub fn channel() -> (Self, mpsc::Receiver<GameEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }
}

impl GameObserver for ChannelObserver {
    fn notify(&mut self, event: &GameEvent) {
        if self.tx.send(*event).is_err() {
            debug!(?event, "Event receiver dropped");
        }
    }
}
