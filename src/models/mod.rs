pub mod element;
pub mod event;
pub mod notification;
pub mod selector;
pub mod status;

// Re-export main types
pub use element::{Element, ElementId};
pub use event::SocketEvent;
pub use notification::{Notification, NotificationPermission};
pub use selector::{Selector, is_valid_name};
pub use status::{ConnectionState, STATUS_CLASS};
