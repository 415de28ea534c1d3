use crate::models::{Notification, NotificationPermission};
use crate::utils::error::{Result, UiError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Host side of desktop notifications
pub trait NotificationProvider: Send + Sync {
    /// Current permission state
    fn permission(&self) -> NotificationPermission;

    /// Prompt the user and return the resulting permission
    fn request_permission(&self) -> NotificationPermission;

    /// Show a notification
    fn display(&self, notification: &Notification) -> Result<()>;
}

/// Whether the host supports desktop notifications at all
#[derive(Clone)]
pub enum NotificationCapability {
    Available(Arc<dyn NotificationProvider>),
    Unavailable,
}

impl NotificationCapability {
    pub fn available(provider: impl NotificationProvider + 'static) -> Self {
        Self::Available(Arc::new(provider))
    }

    /// Permission of the host, `None` without notification support
    pub fn permission(&self) -> Option<NotificationPermission> {
        match self {
            Self::Available(provider) => Some(provider.permission()),
            Self::Unavailable => None,
        }
    }
}

/// Issues desktop notifications when the user allowed them
pub struct Notifier {
    capability: NotificationCapability,
    startup_requested: AtomicBool,
}

impl Notifier {
    pub fn new(capability: NotificationCapability) -> Self {
        Self {
            capability,
            startup_requested: AtomicBool::new(false),
        }
    }

    pub fn capability(&self) -> &NotificationCapability {
        &self.capability
    }

    /// Show a notification if supported and permitted.
    ///
    /// Returns `true` when the host displayed it. Everything else is a
    /// silent no-op.
    pub fn show_notification(&self, title: &str, body: &str) -> bool {
        let NotificationCapability::Available(ref provider) = self.capability else {
            tracing::debug!("Notifications unsupported, skipping '{}'", title);
            return false;
        };

        if !provider.permission().is_granted() {
            tracing::debug!("Notification permission not granted, skipping '{}'", title);
            return false;
        }

        let notification = Notification::new(title, body);
        match provider.display(&notification) {
            Ok(()) => {
                tracing::debug!("Displayed notification {}: {}", notification.id, title);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to display notification '{}': {}", title, e);
                false
            }
        }
    }

    /// Ask for permission when the user has not decided yet.
    ///
    /// Only the first call does anything. Returns the permission after the
    /// prompt, or `None` when no prompt was issued.
    pub fn request_permission_on_startup(&self) -> Option<NotificationPermission> {
        if self.startup_requested.swap(true, Ordering::SeqCst) {
            tracing::debug!("Startup permission request already performed");
            return None;
        }

        let NotificationCapability::Available(ref provider) = self.capability else {
            return None;
        };

        let current = provider.permission();
        if !current.is_undecided() {
            tracing::debug!("Notification permission already decided: {:?}", current);
            return None;
        }

        let permission = provider.request_permission();
        tracing::info!("Notification permission after prompt: {:?}", permission);
        Some(permission)
    }
}

/// Provider keeping everything in memory.
///
/// Prompts resolve to a preset answer and displayed notifications are
/// recorded for inspection.
pub struct InMemoryNotificationProvider {
    permission: Mutex<NotificationPermission>,
    prompt_answer: NotificationPermission,
    prompts: AtomicUsize,
    displayed: Mutex<Vec<Notification>>,
    fail_display: bool,
}

impl InMemoryNotificationProvider {
    pub fn new(permission: NotificationPermission) -> Self {
        Self {
            permission: Mutex::new(permission),
            prompt_answer: NotificationPermission::Granted,
            prompts: AtomicUsize::new(0),
            displayed: Mutex::new(Vec::new()),
            fail_display: false,
        }
    }

    /// Permission the user picks when prompted
    pub fn with_prompt_answer(mut self, answer: NotificationPermission) -> Self {
        self.prompt_answer = answer;
        self
    }

    /// Make every display attempt fail
    pub fn failing(mut self) -> Self {
        self.fail_display = true;
        self
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }

    pub fn displayed(&self) -> Vec<Notification> {
        self.displayed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set_permission(&self, permission: NotificationPermission) {
        *self.permission.lock().unwrap_or_else(|e| e.into_inner()) = permission;
    }
}

impl NotificationProvider for InMemoryNotificationProvider {
    fn permission(&self) -> NotificationPermission {
        *self.permission.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn request_permission(&self) -> NotificationPermission {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        self.set_permission(self.prompt_answer);
        self.prompt_answer
    }

    fn display(&self, notification: &Notification) -> Result<()> {
        if self.fail_display {
            return Err(UiError::NotificationFailed("display rejected by host".to_string()));
        }

        self.displayed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());
        Ok(())
    }
}
