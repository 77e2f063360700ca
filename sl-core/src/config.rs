//! Application configuration management.
//!
//! Handles loading, saving, and accessing application configuration including
//! the backend API, push gateway, AI provider, local storage, and logging
//! settings. Configuration is persisted as TOML on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{SlError, SlResult};
use crate::platform::Platform;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API connection settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Push gateway settings.
    #[serde(default)]
    pub push: PushConfig,

    /// AI provider settings.
    #[serde(default)]
    pub ai: AiConfig,

    /// Local storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend base URL (e.g., "https://api.sitelink.example/v1").
    #[serde(default)]
    pub base_url: String,

    /// Bearer token attached to every backend request when non-empty.
    #[serde(default)]
    pub auth_token: String,

    /// Outbound request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,
}

/// Push gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Push gateway endpoint URL.
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// Notification sound.
    #[serde(default = "default_sound")]
    pub sound: String,

    /// Delivery priority.
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Android notification channel id.
    #[serde(default = "default_channel")]
    pub channel_id: String,
}

/// AI provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// AI provider base URL.
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,

    /// API key for the AI provider.
    #[serde(default)]
    pub api_key: String,

    /// Audio transcription model.
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,

    /// Text generation model.
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Speech synthesis model.
    #[serde(default = "default_speech_model")]
    pub speech_model: String,

    /// Speech synthesis voice.
    #[serde(default = "default_speech_voice")]
    pub voice: String,
}

/// Local storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file. If empty, uses default location.
    #[serde(default)]
    pub path: String,

    /// Enable WAL (Write-Ahead Logging) mode.
    #[serde(default = "default_true")]
    pub wal_mode: bool,

    /// Maximum number of connections in the pool.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_gateway_url() -> String {
    constants::DEFAULT_PUSH_GATEWAY_URL.to_string()
}

fn default_sound() -> String {
    constants::DEFAULT_NOTIFICATION_SOUND.to_string()
}

fn default_priority() -> String {
    constants::DEFAULT_NOTIFICATION_PRIORITY.to_string()
}

fn default_channel() -> String {
    constants::DEFAULT_NOTIFICATION_CHANNEL.to_string()
}

fn default_ai_base_url() -> String {
    constants::DEFAULT_AI_BASE_URL.to_string()
}

fn default_transcription_model() -> String {
    constants::DEFAULT_TRANSCRIPTION_MODEL.to_string()
}

fn default_text_model() -> String {
    constants::DEFAULT_TEXT_MODEL.to_string()
}

fn default_speech_model() -> String {
    constants::DEFAULT_SPEECH_MODEL.to_string()
}

fn default_speech_voice() -> String {
    constants::DEFAULT_SPEECH_VOICE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_pool_size() -> u32 {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            push: PushConfig::default(),
            ai: AiConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            auth_token: String::new(),
            api_timeout_ms: default_api_timeout(),
        }
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            sound: default_sound(),
            priority: default_priority(),
            channel_id: default_channel(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_ai_base_url(),
            api_key: String::new(),
            transcription_model: default_transcription_model(),
            text_model: default_text_model(),
            speech_model: default_speech_model(),
            voice: default_speech_voice(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            wal_mode: true,
            pool_size: default_pool_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> SlResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> SlResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> SlResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| SlError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> SlResult<PathBuf> {
        let config_dir = Platform::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the effective database path, using the configured path or the default.
    pub fn effective_db_path(&self) -> SlResult<PathBuf> {
        if self.storage.path.is_empty() {
            let data_dir = Platform::data_dir()?;
            Ok(data_dir.join("sitelink.db"))
        } else {
            Ok(PathBuf::from(&self.storage.path))
        }
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> SlResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let data_dir = Platform::data_dir()?;
            Ok(data_dir.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Check whether the backend connection is configured.
    pub fn is_backend_configured(&self) -> bool {
        !self.backend.base_url.is_empty()
    }
}

/// Thread-safe configuration holder for shared access across components.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<AppConfig>>,
}

impl ConfigHandle {
    /// Create a new configuration handle.
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Read the configuration.
    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, AppConfig> {
        self.inner.read().await
    }

    /// Write/update the configuration.
    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, AppConfig> {
        self.inner.write().await
    }
}
