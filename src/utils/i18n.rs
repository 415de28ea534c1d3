use crate::services::config_service::ConfigService;
use std::sync::OnceLock;

static CURRENT_LANGUAGE: OnceLock<String> = OnceLock::new();

/// Initialize and set default language
pub fn set_language(config_service: &ConfigService) {
    let lang = detect_system_language()
        .or_else(|| load_saved_language(config_service))
        .unwrap_or_else(|| "en".to_string());

    CURRENT_LANGUAGE.set(lang.clone()).ok();
    rust_i18n::set_locale(&lang);

    tracing::info!("Language set to: {}", lang);
}

/// Get current language
pub fn current_language() -> String {
    CURRENT_LANGUAGE
        .get()
        .cloned()
        .unwrap_or_else(|| rust_i18n::locale().to_string())
}

/// Detect system language from environment
fn detect_system_language() -> Option<String> {
    std::env::var("LANG").ok().map(|lang| normalize_language(&lang))
}

/// Map a `LANG` style value ("zh_CN.UTF-8") onto a bundled locale
fn normalize_language(lang: &str) -> String {
    if lang.starts_with("zh") || lang.contains("zh_CN") || lang.contains("zh_Hans") {
        "zh-CN".to_string()
    } else {
        "en".to_string()
    }
}

/// Load saved language preference from config
fn load_saved_language(config_service: &ConfigService) -> Option<String> {
    let config = config_service.load_config().ok()?;
    config.language.map(|lang| normalize_language(&lang))
}

/// Get available languages
pub fn available_languages() -> Vec<(&'static str, &'static str)> {
    vec![("zh-CN", "简体中文"), ("en", "English")]
}
