use crate::models::{ConnectionState, ElementId, SocketEvent};
use crate::services::document::Document;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Connection status indicator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Identifier of the status element, unique per document
    #[serde(default = "default_element_id")]
    pub element_id: String,

    /// Where the element is inserted on disconnect
    #[serde(default = "default_container_selector")]
    pub container_selector: String,

    /// How long "Connected" stays visible before the element removes itself
    #[serde(default = "default_display_window_ms")]
    pub display_window_ms: u64,

    /// Insert the element right away instead of waiting for a disconnect
    #[serde(default)]
    pub show_on_attach: bool,
}

impl IndicatorConfig {
    pub fn display_window(&self) -> Duration {
        Duration::from_millis(self.display_window_ms)
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            element_id: default_element_id(),
            container_selector: default_container_selector(),
            display_window_ms: default_display_window_ms(),
            show_on_attach: false,
        }
    }
}

fn default_element_id() -> String {
    "connectionStatus".to_string()
}

fn default_container_selector() -> String {
    ".container".to_string()
}

fn default_display_window_ms() -> u64 {
    3000
}

/// Mutable part of the indicator, only touched under the lock
struct IndicatorInner {
    state: ConnectionState,
    /// Whether this indicator put its element into the document
    attached: bool,
    /// Pending self-removal after a connect
    removal: Option<JoinHandle<()>>,
}

impl IndicatorInner {
    fn cancel_removal(&mut self) {
        if let Some(handle) = self.removal.take() {
            handle.abort();
        }
    }
}

/// Shared core, cloned into the listener and removal tasks
#[derive(Clone)]
struct IndicatorCore {
    document: Document,
    config: IndicatorConfig,
    element: ElementId,
    label: ElementId,
    inner: Arc<Mutex<IndicatorInner>>,
}

impl IndicatorCore {
    async fn handle_event(&self, event: &SocketEvent) {
        match event {
            SocketEvent::Connect => self.on_connect().await,
            SocketEvent::Disconnect => self.on_disconnect().await,
            SocketEvent::ConnectError(err) => {
                tracing::error!("Connection error: {}", err);
            }
        }
    }

    async fn on_connect(&self) {
        let mut inner = self.inner.lock().await;
        inner.cancel_removal();
        inner.state = ConnectionState::Connected;
        self.render(ConnectionState::Connected).await;

        let core = self.clone();
        let window = self.config.display_window();
        inner.removal = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            core.remove_after_window().await;
        }));

        tracing::debug!("Connected, status hides in {}ms", self.config.display_window_ms);
    }

    async fn on_disconnect(&self) {
        let mut inner = self.inner.lock().await;
        inner.cancel_removal();
        inner.state = ConnectionState::Disconnected;
        self.render(ConnectionState::Disconnected).await;

        // The element may have left with its container
        inner.attached = inner.attached && self.document.is_attached(self.element).await;
        if !inner.attached {
            inner.attached = self.insert_into_container().await;
        }
    }

    async fn remove_after_window(&self) {
        let mut inner = self.inner.lock().await;
        inner.removal = None;

        match self.document.remove(self.element).await {
            Ok(_) => {
                inner.attached = false;
                tracing::debug!("Connection status hidden");
            }
            Err(e) => tracing::warn!("Failed to hide connection status: {}", e),
        }
    }

    /// Put the element first in the container.
    ///
    /// Returns `false` without touching the document when another element
    /// already carries the identifier or the container is missing.
    async fn insert_into_container(&self) -> bool {
        if self
            .document
            .get_element_by_id(&self.config.element_id)
            .await
            .is_some()
        {
            tracing::debug!(
                "Element '{}' already displayed, not inserting another",
                self.config.element_id
            );
            return false;
        }

        let container = match self.document.query_selector(&self.config.container_selector).await {
            Ok(Some(container)) => container,
            Ok(None) => {
                tracing::debug!(
                    "No '{}' container, connection status stays hidden",
                    self.config.container_selector
                );
                return false;
            }
            Err(e) => {
                tracing::warn!("Cannot locate status container: {}", e);
                return false;
            }
        };

        match self.document.insert_first_child(container, self.element).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to insert connection status: {}", e);
                false
            }
        }
    }

    async fn render(&self, state: ConnectionState) {
        if let Err(e) = self.document.set_class_name(self.element, &state.class_name()).await {
            tracing::warn!("Failed to update status class: {}", e);
        }
        if let Err(e) = self.document.set_text(self.label, state.label()).await {
            tracing::warn!("Failed to update status label: {}", e);
        }
    }
}

/// Shows the real-time connection state in a single status element.
///
/// The element starts out detached with a "Connecting..." label. A
/// disconnect inserts it as the first child of the container; a connect
/// shows "Connected" and removes it once the display window elapsed.
/// Every transition cancels a pending removal.
pub struct ConnectionStatusIndicator {
    core: IndicatorCore,
    listener: Option<JoinHandle<()>>,
}

impl ConnectionStatusIndicator {
    /// Build the status element in `document`
    pub async fn attach(document: Document, config: IndicatorConfig) -> Result<Self> {
        let initial = ConnectionState::Connecting;

        let element = document.create_element("div").await;
        document.set_id(element, &config.element_id).await?;
        document.set_class_name(element, &initial.class_name()).await?;

        let dot = document.create_element("span").await;
        document.set_class_name(dot, "dot").await?;
        document.append_child(element, dot).await?;

        let label = document.create_element("span").await;
        document.set_text(label, initial.label()).await?;
        document.append_child(element, label).await?;

        let core = IndicatorCore {
            document,
            config,
            element,
            label,
            inner: Arc::new(Mutex::new(IndicatorInner {
                state: initial,
                attached: false,
                removal: None,
            })),
        };

        if core.config.show_on_attach {
            let attached = core.insert_into_container().await;
            core.inner.lock().await.attached = attached;
        }

        tracing::debug!("Attached connection status indicator {}", element);

        Ok(Self {
            core,
            listener: None,
        })
    }

    /// Follow the events of a connection in a background task.
    ///
    /// Replaces a previous listener.
    pub fn listen(&mut self, mut events: broadcast::Receiver<SocketEvent>) {
        if let Some(handle) = self.listener.take() {
            handle.abort();
        }

        let core = self.core.clone();
        self.listener = Some(tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => core.handle_event(&event).await,
                    Err(RecvError::Lagged(missed)) => {
                        tracing::warn!("Connection status missed {} event(s)", missed);
                    }
                    Err(RecvError::Closed) => {
                        tracing::debug!("Connection event channel closed");
                        break;
                    }
                }
            }
        }));
    }

    /// Apply a single lifecycle event
    pub async fn handle_event(&self, event: &SocketEvent) {
        self.core.handle_event(event).await;
    }

    pub async fn state(&self) -> ConnectionState {
        self.core.inner.lock().await.state
    }

    /// Current label text
    pub async fn label(&self) -> String {
        self.core
            .document
            .text_content(self.core.label)
            .await
            .unwrap_or_default()
    }

    /// Whether the element is currently shown by this indicator
    pub async fn is_displayed(&self) -> bool {
        let attached = self.core.inner.lock().await.attached;
        attached && self.core.document.is_attached(self.core.element).await
    }

    /// Whether a self-removal is scheduled
    pub async fn removal_pending(&self) -> bool {
        self.core.inner.lock().await.removal.is_some()
    }

    pub fn element(&self) -> ElementId {
        self.core.element
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.core.config
    }

    /// Stop listening and take the element out of the document
    pub async fn detach(&mut self) {
        if let Some(handle) = self.listener.take() {
            handle.abort();
        }

        let mut inner = self.core.inner.lock().await;
        inner.cancel_removal();
        if let Err(e) = self.core.document.remove(self.core.element).await {
            tracing::warn!("Failed to remove connection status: {}", e);
        }
        inner.attached = false;

        tracing::debug!("Detached connection status indicator {}", self.core.element);
    }
}

impl Drop for ConnectionStatusIndicator {
    fn drop(&mut self) {
        if let Some(handle) = self.listener.take() {
            handle.abort();
        }
        if let Ok(mut inner) = self.core.inner.try_lock() {
            inner.cancel_removal();
        }
    }
}
