use crate::models::ElementId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid class name: '{0}'")]
    InvalidClassName(String),

    #[error("Hierarchy request failed: {0}")]
    HierarchyRequest(String),

    #[error("Notification failed: {0}")]
    NotificationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;

impl UiError {
    /// Returns a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ElementNotFound(id) => format!("Element {} is not part of the document", id),
            Self::InvalidSelector(selector) => {
                format!("Unsupported selector '{}', use .class, #id or tag", selector)
            }
            Self::InvalidClassName(class) => {
                format!("Class name '{}' must be a single word of letters, digits, '-' or '_'", class)
            }
            Self::HierarchyRequest(reason) => format!("Cannot insert element: {}", reason),
            Self::NotificationFailed(reason) => format!("Notification could not be shown: {}", reason),
            Self::ConfigError(reason) => format!("Configuration error: {}", reason),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_selector() {
        let err = UiError::InvalidSelector("div > span".to_string());
        assert!(err.user_message().contains(".class"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: UiError = io.into();
        assert!(matches!(err, UiError::IoError(_)));
        assert!(err.user_message().contains("missing"));
    }
}
