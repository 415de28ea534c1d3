use crate::models::Element;
use crate::utils::error::UiError;
use std::fmt;
use std::str::FromStr;

/// Simple selector supported by the document queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `.name`
    Class(String),
    /// `#name`
    Id(String),
    /// `name`
    Tag(String),
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Class(class) => element.has_class(class),
            Self::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Self::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
        }
    }
}

/// Whether `s` can be used as a class or id in a selector
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FromStr for Selector {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let selector = if let Some(class) = s.strip_prefix('.') {
            is_valid_name(class).then(|| Self::Class(class.to_string()))
        } else if let Some(id) = s.strip_prefix('#') {
            is_valid_name(id).then(|| Self::Id(id.to_string()))
        } else {
            is_valid_name(s).then(|| Self::Tag(s.to_ascii_lowercase()))
        };

        selector.ok_or_else(|| UiError::InvalidSelector(s.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, ".{}", class),
            Self::Id(id) => write!(f, "#{}", id),
            Self::Tag(tag) => write!(f, "{}", tag),
        }
    }
}
