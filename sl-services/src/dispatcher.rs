//! Broadcast dispatcher for record events.
//!
//! Decouples the event source from handlers using a tokio broadcast
//! channel: the source emits without knowing who is listening, and any
//! number of subscribers independently consume events.

use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

use crate::event::RecordEvent;

/// Record-event dispatcher backed by a tokio broadcast channel.
///
/// Every subscriber gets every event. Slow subscribers that fall behind
/// receive a `Lagged` error and miss events; notifications are best-effort
/// so that is acceptable.
#[derive(Clone)]
pub struct EventDispatcher {
    sender: Arc<broadcast::Sender<RecordEvent>>,
}

impl EventDispatcher {
    /// Create a new EventDispatcher with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Subscribe to receive record events.
    pub fn subscribe(&self) -> broadcast::Receiver<RecordEvent> {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers.
    pub fn emit(&self, event: RecordEvent) {
        let label = event.label();
        match self.sender.send(event) {
            Ok(count) => debug!("dispatcher: emitted {label} to {count} subscriber(s)"),
            Err(_) => debug!("dispatcher: no subscribers for {label}"),
        }
    }

    /// Get the current number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
