use serde::{Deserialize, Serialize};

/// Base class carried by the status element in every state
pub const STATUS_CLASS: &str = "connection-status";

/// State shown by the connection status indicator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionState {
    /// Label shown next to the dot, identical in every locale
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected - Reconnecting...",
        }
    }

    /// Class attribute of the status element.
    ///
    /// `Connecting` shares the disconnected styling.
    pub fn class_name(&self) -> String {
        let modifier = match self {
            Self::Connected => "connected",
            Self::Connecting | Self::Disconnected => "disconnected",
        };
        format!("{} {}", STATUS_CLASS, modifier)
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}
