use crate::models::{Selector, is_valid_name};
use crate::services::banner_service::ERROR_CLASS;
use crate::services::status_indicator::IndicatorConfig;
use crate::utils::error::{Result, UiError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Service for managing configuration persistence
pub struct ConfigService {
    config_dir: PathBuf,
}

impl ConfigService {
    /// Create a new config service with default directory
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
            tracing::info!("Created config directory: {:?}", config_dir);
        }

        Ok(Self { config_dir })
    }

    /// Create a config service with custom directory
    pub fn with_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }
        Ok(Self { config_dir })
    }

    /// Get default config directory
    fn get_config_dir() -> Result<PathBuf> {
        ProjectDirs::from("com", "multishare", "multishare-ui")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| UiError::ConfigError("Failed to get config directory".to_string()))
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    /// Load the UI configuration, falling back to defaults
    pub fn load_config(&self) -> Result<UiConfig> {
        let path = self.settings_file();

        if !path.exists() {
            tracing::info!("No settings file found, using defaults");
            return Ok(UiConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: UiConfig = toml::from_str(&content)
            .map_err(|e| UiError::ConfigError(format!("Failed to parse settings: {}", e)))?;
        config.validate()?;

        tracing::info!(
            "Loaded settings: status window={}ms, banner class={}",
            config.status.display_window_ms,
            config.banner.class
        );
        Ok(config)
    }

    /// Save the UI configuration
    pub fn save_config(&self, config: &UiConfig) -> Result<()> {
        let content = toml::to_string_pretty(config)?;

        let path = self.settings_file();
        fs::write(&path, content)?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

/// UI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI language (e.g., "en", "zh-CN"); detected when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub status: IndicatorConfig,

    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub events: EventConfig,
}

impl UiConfig {
    /// Reject names the document queries could not match later
    pub fn validate(&self) -> Result<()> {
        if !is_valid_name(&self.banner.class) {
            return Err(UiError::ConfigError(format!(
                "banner.class '{}' is not a single class name",
                self.banner.class
            )));
        }
        if !is_valid_name(&self.status.element_id) {
            return Err(UiError::ConfigError(format!(
                "status.element_id '{}' is not a valid id",
                self.status.element_id
            )));
        }
        if self.status.container_selector.parse::<Selector>().is_err() {
            return Err(UiError::ConfigError(format!(
                "status.container_selector '{}' is not a supported selector",
                self.status.container_selector
            )));
        }
        Ok(())
    }
}

/// Error banner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Marker class shared by every banner
    #[serde(default = "default_banner_class")]
    pub class: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            class: default_banner_class(),
        }
    }
}

fn default_banner_class() -> String {
    ERROR_CLASS.to_string()
}

/// Connection event settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Buffered events per subscriber before it lags
    #[serde(default = "default_event_capacity")]
    pub capacity: usize,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            capacity: default_event_capacity(),
        }
    }
}

fn default_event_capacity() -> usize {
    64
}
