//! Integration tests for the connection status indicator
//!
//! Events are delivered through a SocketChannel like the real client does.
//! Time is paused so the display window elapses instantly.

use multishare_ui::models::{ConnectionState, ElementId, SocketEvent};
use multishare_ui::services::document::Document;
use multishare_ui::services::socket_channel::SocketChannel;
use multishare_ui::services::status_indicator::{ConnectionStatusIndicator, IndicatorConfig};
use std::time::Duration;

async fn document_with_container() -> (Document, ElementId) {
    let doc = Document::new();
    let body = doc.body().await;
    let container = doc.create_element("div").await;
    doc.set_class_name(container, "container").await.unwrap();
    doc.append_child(body, container).await.unwrap();
    (doc, container)
}

async fn listening_indicator(doc: &Document, channel: &SocketChannel) -> ConnectionStatusIndicator {
    let mut indicator = ConnectionStatusIndicator::attach(doc.clone(), IndicatorConfig::default())
        .await
        .expect("Failed to attach indicator");
    indicator.listen(channel.subscribe());
    indicator
}

/// Let the listener task drain the channel
async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

// =============================================================================
// Lifecycle Through The Channel
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_connect_then_disconnect_labels() {
    let (doc, _) = document_with_container().await;
    let channel = SocketChannel::default();
    let indicator = listening_indicator(&doc, &channel).await;

    channel.emit(SocketEvent::Connect);
    settle().await;
    assert!(indicator.label().await.contains("Connected"));
    assert_eq!(indicator.state().await, ConnectionState::Connected);

    channel.emit(SocketEvent::Disconnect);
    settle().await;
    assert!(indicator.label().await.contains("Disconnected"));
    assert_eq!(indicator.state().await, ConnectionState::Disconnected);
}

#[tokio::test(start_paused = true)]
async fn test_connect_removes_element_after_window() {
    let (doc, _) = document_with_container().await;
    let channel = SocketChannel::default();
    let indicator = listening_indicator(&doc, &channel).await;

    channel.emit(SocketEvent::Disconnect);
    settle().await;
    assert!(doc.get_element_by_id("connectionStatus").await.is_some());

    channel.emit(SocketEvent::Connect);
    settle().await;
    assert!(doc.get_element_by_id("connectionStatus").await.is_some());

    tokio::time::sleep(Duration::from_millis(3100)).await;
    assert!(doc.get_element_by_id("connectionStatus").await.is_none());
    assert!(!indicator.is_displayed().await);
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_within_window_keeps_element() {
    let (doc, _) = document_with_container().await;
    let channel = SocketChannel::default();
    let _indicator = listening_indicator(&doc, &channel).await;

    channel.emit(SocketEvent::Disconnect);
    settle().await;
    channel.emit(SocketEvent::Connect);
    settle().await;

    tokio::time::sleep(Duration::from_millis(2000)).await;
    channel.emit(SocketEvent::Disconnect);
    settle().await;

    tokio::time::sleep(Duration::from_millis(4000)).await;
    assert!(doc.get_element_by_id("connectionStatus").await.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_reconnect_rearms_window() {
    let (doc, _) = document_with_container().await;
    let channel = SocketChannel::default();
    let indicator = listening_indicator(&doc, &channel).await;

    channel.emit(SocketEvent::Disconnect);
    settle().await;
    channel.emit(SocketEvent::Connect);
    settle().await;
    tokio::time::sleep(Duration::from_millis(2000)).await;

    // Second connect restarts the window
    channel.emit(SocketEvent::Connect);
    settle().await;
    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(doc.is_attached(indicator.element()).await);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert!(!doc.is_attached(indicator.element()).await);
}

#[tokio::test(start_paused = true)]
async fn test_cycles_between_states() {
    let (doc, container) = document_with_container().await;
    let channel = SocketChannel::default();
    let indicator = listening_indicator(&doc, &channel).await;

    for _ in 0..3 {
        channel.emit(SocketEvent::Disconnect);
        settle().await;
        assert!(indicator.is_displayed().await);
        assert_eq!(doc.element(container).await.unwrap().children, vec![indicator.element()]);

        channel.emit(SocketEvent::Connect);
        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(!indicator.is_displayed().await);
        assert!(doc.element(container).await.unwrap().children.is_empty());
    }
}

#[tokio::test(start_paused = true)]
async fn test_connect_error_only_logs() {
    let (doc, _) = document_with_container().await;
    let channel = SocketChannel::default();
    let indicator = listening_indicator(&doc, &channel).await;

    channel.emit(SocketEvent::ConnectError("websocket error".to_string()));
    settle().await;

    assert_eq!(indicator.state().await, ConnectionState::Connecting);
    assert_eq!(indicator.label().await, "Connecting...");
    assert!(doc.get_element_by_id("connectionStatus").await.is_none());
}

// =============================================================================
// Singleton Guard
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_two_indicators_share_one_slot() {
    let (doc, container) = document_with_container().await;
    let channel = SocketChannel::default();
    let first = listening_indicator(&doc, &channel).await;
    let second = listening_indicator(&doc, &channel).await;

    channel.emit(SocketEvent::Disconnect);
    settle().await;

    assert_eq!(doc.query_selector_all("#connectionStatus").await.unwrap().len(), 1);
    assert_eq!(doc.element(container).await.unwrap().children.len(), 1);
    assert!(first.is_displayed().await != second.is_displayed().await);
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_without_container_is_silent() {
    let doc = Document::new();
    let channel = SocketChannel::default();
    let indicator = listening_indicator(&doc, &channel).await;

    channel.emit(SocketEvent::Disconnect);
    settle().await;

    assert_eq!(indicator.state().await, ConnectionState::Disconnected);
    assert!(doc.get_element_by_id("connectionStatus").await.is_none());
    assert_eq!(doc.render().await, "<body></body>");
}

#[tokio::test(start_paused = true)]
async fn test_container_added_later() {
    let doc = Document::new();
    let channel = SocketChannel::default();
    let indicator = listening_indicator(&doc, &channel).await;

    channel.emit(SocketEvent::Disconnect);
    settle().await;
    assert!(!indicator.is_displayed().await);

    let body = doc.body().await;
    let container = doc.create_element("div").await;
    doc.set_class_name(container, "container").await.unwrap();
    doc.append_child(body, container).await.unwrap();

    channel.emit(SocketEvent::Disconnect);
    settle().await;
    assert!(indicator.is_displayed().await);
}

#[tokio::test(start_paused = true)]
async fn test_closed_channel_stops_listener() {
    let (doc, _) = document_with_container().await;
    let channel = SocketChannel::default();
    let indicator = listening_indicator(&doc, &channel).await;

    drop(channel);
    settle().await;

    // Direct events still apply after the listener is gone
    indicator.handle_event(&SocketEvent::Disconnect).await;
    assert!(indicator.is_displayed().await);
}

#[tokio::test(start_paused = true)]
async fn test_detach_stops_updates() {
    let (doc, _) = document_with_container().await;
    let channel = SocketChannel::default();
    let mut indicator = listening_indicator(&doc, &channel).await;

    indicator.detach().await;
    channel.emit(SocketEvent::Disconnect);
    settle().await;

    assert_eq!(indicator.state().await, ConnectionState::Connecting);
    assert!(doc.get_element_by_id("connectionStatus").await.is_none());
}
