// Services module
pub mod banner_service;
pub mod config_service;
pub mod document;
pub mod notification_service;
pub mod socket_channel;
pub mod status_indicator;
