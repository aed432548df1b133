use tokio::sync::broadcast;

use crate::dto::events::GameEvent;

/// Broadcast hub fanning game events out to rendering subscribers.
pub struct EventHub {
    sender: broadcast::Sender<GameEvent>,
}

impl EventHub {
    /// Construct a hub backed by a Tokio broadcast channel with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Register a new subscriber that will receive subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.sender.subscribe()
    }

    /// Send an event to all current subscribers, ignoring delivery errors.
    pub fn broadcast(&self, event: GameEvent) {
        let _ = self.sender.send(event);
    }
}
