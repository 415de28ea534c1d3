use crate::models::{ElementId, NotificationPermission};
use crate::services::banner_service::BannerService;
use crate::services::config_service::UiConfig;
use crate::services::document::Document;
use crate::services::notification_service::{NotificationCapability, Notifier};
use crate::services::socket_channel::SocketChannel;
use crate::services::status_indicator::ConnectionStatusIndicator;
use crate::utils::error::Result;
use std::sync::Arc;

/// Application global state
pub struct AppState {
    /// Document the helpers render into
    pub document: Document,

    /// Desktop notifications
    pub notifier: Arc<Notifier>,

    /// Error banners
    pub banners: BannerService,

    /// Loaded configuration
    pub config: UiConfig,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: UiConfig, capability: NotificationCapability) -> Result<Self> {
        let document = Document::new();
        let banners = BannerService::with_class(document.clone(), config.banner.class.clone())?;

        Ok(Self {
            document,
            notifier: Arc::new(Notifier::new(capability)),
            banners,
            config,
        })
    }

    /// One-time startup work: ask for notification permission if undecided
    pub fn init(&self) -> Option<NotificationPermission> {
        self.notifier.request_permission_on_startup()
    }

    /// Create a status indicator following `channel`
    pub async fn attach_status_indicator(
        &self,
        channel: &SocketChannel,
    ) -> Result<ConnectionStatusIndicator> {
        let mut indicator =
            ConnectionStatusIndicator::attach(self.document.clone(), self.config.status.clone())
                .await?;
        indicator.listen(channel.subscribe());
        Ok(indicator)
    }

    /// Build a banner and show it first in the container.
    ///
    /// Falls back to the body without a container.
    pub async fn display_error(&self, message: &str) -> Result<ElementId> {
        let banner = self.banners.show_error(message).await;

        let parent = match self.document.query_selector(&self.config.status.container_selector).await? {
            Some(container) => container,
            None => self.document.body().await,
        };
        self.document.insert_first_child(parent, banner).await?;

        Ok(banner)
    }

    /// Remove all displayed error banners
    pub async fn clear_errors(&self) -> usize {
        self.banners.remove_errors().await
    }

    /// Show a desktop notification if permitted
    pub fn notify(&self, title: &str, body: &str) -> bool {
        self.notifier.show_notification(title, body)
    }
}
