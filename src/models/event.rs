use serde::{Deserialize, Serialize};

/// Lifecycle events published by the real-time connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum SocketEvent {
    /// Connection established
    Connect,

    /// Connection lost, the client retries on its own
    Disconnect,

    /// A connection attempt failed
    ConnectError(String),
}

impl SocketEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
            Self::ConnectError(_) => "connect_error",
        }
    }
}
