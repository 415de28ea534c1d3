use multishare_ui::models::{NotificationPermission, SocketEvent};
use multishare_ui::services::config_service::UiConfig;
use multishare_ui::services::notification_service::{
    InMemoryNotificationProvider, NotificationCapability,
};
use multishare_ui::services::socket_channel::SocketChannel;
use multishare_ui::state::AppState;
use multishare_ui::utils::format_size;
use std::sync::Arc;
use std::time::Duration;

/// Gives the listener task time to apply an emitted event
const SETTLE: Duration = Duration::from_millis(50);

/// Run a simulated connection lifecycle against a fresh document
pub async fn run_demo(mut config: UiConfig, no_container: bool, window_ms: Option<u64>) -> anyhow::Result<()> {
    if let Some(window_ms) = window_ms {
        config.status.display_window_ms = window_ms;
    }
    let window = config.status.display_window();

    let provider = Arc::new(InMemoryNotificationProvider::new(NotificationPermission::Default));
    let state = AppState::new(config.clone(), NotificationCapability::Available(provider.clone()))?;

    if let Some(permission) = state.init() {
        tracing::info!("Notification permission: {:?}", permission);
    }

    if no_container {
        println!("{}", rust_i18n::t!("demo.no_container"));
    } else {
        let body = state.document.body().await;
        let container = state.document.create_element("div").await;
        state.document.set_class_name(container, "container").await?;
        state.document.append_child(body, container).await?;
    }

    let channel = SocketChannel::new(config.events.capacity);
    let _indicator = state.attach_status_indicator(&channel).await?;

    step(&state, "attach").await;

    channel.emit(SocketEvent::Disconnect);
    tokio::time::sleep(SETTLE).await;
    state.display_error("Transfer interrupted").await?;
    step(&state, "disconnect").await;

    channel.emit(SocketEvent::ConnectError("xhr poll error".to_string()));
    tokio::time::sleep(SETTLE).await;
    step(&state, "connect_error").await;

    channel.emit(SocketEvent::Connect);
    tokio::time::sleep(SETTLE).await;
    state.clear_errors().await;
    state.notify(
        "Reconnected",
        &format!("Resuming transfer of {}", format_size(5 * 1024 * 1024 + 512 * 1024)),
    );
    step(&state, "connect").await;

    tokio::time::sleep(window + SETTLE).await;
    step(&state, "display window elapsed").await;

    for notification in provider.displayed() {
        println!("notification: {} - {}", notification.title, notification.body);
    }

    Ok(())
}

async fn step(state: &AppState, name: &str) {
    println!("{}", rust_i18n::t!("demo.step", step = name));
    println!("  {}", state.document.render().await);
}
