use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to an element owned by a [`Document`](crate::services::document::Document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub(crate) u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node of the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, lowercase ("div", "span")
    pub tag: String,

    /// Identifier attribute
    pub id: Option<String>,

    /// Class list in declaration order
    pub classes: Vec<String>,

    /// Own text, rendered before the children
    pub text: String,

    /// Child elements in document order
    pub children: Vec<ElementId>,

    /// Parent element, `None` while detached
    pub parent: Option<ElementId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Space separated class attribute
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(str::to_string).collect();
    }
}
