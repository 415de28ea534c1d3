use crate::models::{ElementId, is_valid_name};
use crate::services::document::Document;
use crate::utils::error::{Result, UiError};

/// Default marker class shared by every error banner
pub const ERROR_CLASS: &str = "error-message";

/// Creates and sweeps transient error banners
#[derive(Clone)]
pub struct BannerService {
    document: Document,
    class: String,
}

impl BannerService {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            class: ERROR_CLASS.to_string(),
        }
    }

    /// Use a custom marker class.
    ///
    /// The class has to be a single selector name, otherwise banners could
    /// not be swept again.
    pub fn with_class(document: Document, class: impl Into<String>) -> Result<Self> {
        let class = class.into();
        if !is_valid_name(&class) {
            return Err(UiError::InvalidClassName(class));
        }

        Ok(Self { document, class })
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Build a banner carrying `message`.
    ///
    /// The banner is returned detached; inserting it is up to the caller.
    pub async fn show_error(&self, message: &str) -> ElementId {
        let banner = self.document.create_element("div").await;

        if let Err(e) = self.document.set_class_name(banner, &self.class).await {
            tracing::warn!("Failed to mark error banner: {}", e);
        }
        if let Err(e) = self.document.set_text(banner, message).await {
            tracing::warn!("Failed to set error banner text: {}", e);
        }

        tracing::debug!("Created error banner {}: {}", banner, message);
        banner
    }

    /// Remove every attached banner. Returns how many were removed.
    pub async fn remove_errors(&self) -> usize {
        let selector = format!(".{}", self.class);
        let banners = match self.document.query_selector_all(&selector).await {
            Ok(banners) => banners,
            Err(e) => {
                tracing::warn!("Cannot sweep error banners: {}", e);
                return 0;
            }
        };

        let mut removed = 0;
        for banner in banners {
            match self.document.remove(banner).await {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to remove error banner {}: {}", banner, e),
            }
        }

        if removed > 0 {
            tracing::debug!("Removed {} error banner(s)", removed);
        }
        removed
    }
}
