use crate::models::SocketEvent;
use tokio::sync::broadcast;

/// Fan-out of connection lifecycle events
#[derive(Clone)]
pub struct SocketChannel {
    sender: broadcast::Sender<SocketEvent>,
}

impl SocketChannel {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event, returning how many subscribers received it
    pub fn emit(&self, event: SocketEvent) -> usize {
        tracing::debug!("Socket event: {}", event.name());
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SocketEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SocketChannel {
    fn default() -> Self {
        Self::new(64)
    }
}
