//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{ClientConfig, DEFAULT_API_BASE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

fn default_token_path() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("ajarin").join("token").to_string_lossy().to_string())
        .unwrap_or_else(|| "./.ajarin_token".to_string())
}

impl SessionConfig {
    /// Token file path with a leading `~/` expanded
    pub fn token_file(&self) -> PathBuf {
        match (self.token_path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.token_path),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

/// Dashboard rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_bar_width() -> usize {
    40
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ajarin").join("config.toml"))
    }

    /// Load from default locations or environment.
    ///
    /// The first existing file wins. A file that exists but cannot be
    /// loaded is an error, not a reason to fall back to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [Self::default_path(), Some(PathBuf::from("./ajarin.toml"))];
        Self::load_first(config_paths.iter().flatten())
    }

    fn load_first<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> Result<Self, ConfigError> {
        match paths.into_iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::debug!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => Ok(Self::from_env()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("AJARIN_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = var("AJARIN_API_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = Some(secs);
            }
        }

        if let Some(path) = var("AJARIN_TOKEN_PATH") {
            self.session.token_path = path;
        }

        if let Some(level) = var("AJARIN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("AJARIN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Ajarindongdit Dashboard Configuration
#
# Environment variables override these settings:
# - AJARIN_API_URL
# - AJARIN_API_TIMEOUT_SECS
# - AJARIN_TOKEN_PATH
# - AJARIN_LOG_LEVEL
# - AJARIN_LOG_FORMAT

[api]
# Base URL of the dashboard API
base_url = "http://localhost:5000/api"

# Request timeout in seconds (unset: wait indefinitely)
# request_timeout_secs = 30

[session]
# File holding the bearer token between runs
token_path = "~/.local/share/ajarin/token"

[display]
# Width of the longest bar in the sales chart
bar_width = 40

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: text or json
format = "text"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.request_timeout_secs, None);
        assert_eq!(config.display.bar_width, 40);
        assert_eq!(config.logging.format, "text");
        assert!(config.session.token_path.ends_with("token"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse(
            r#"
            [api]
            base_url = "https://dash.example.com/api"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://dash.example.com/api");
        assert_eq!(config.display.bar_width, 40);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.session.token_path, "~/.local/share/ajarin/token");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("AJARIN_API_URL", "http://10.0.0.2:5000/api"),
            ("AJARIN_API_TIMEOUT_SECS", "15"),
            ("AJARIN_TOKEN_PATH", "/tmp/tok"),
            ("AJARIN_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://10.0.0.2:5000/api");
        assert_eq!(config.api.request_timeout_secs, Some(15));
        assert_eq!(config.session.token_path, "/tmp/tok");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");

        let client = config.api.client_config();
        assert_eq!(client.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_token_file_expands_home() {
        let session = SessionConfig {
            token_path: "~/.local/share/ajarin/token".to_string(),
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(session.token_file(), home.join(".local/share/ajarin/token"));
        }

        let session = SessionConfig {
            token_path: "/var/lib/ajarin/token".to_string(),
        };
        assert_eq!(session.token_file(), PathBuf::from("/var/lib/ajarin/token"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_first_existing_file_wins() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let present = dir.path().join("ajarin.toml");
        std::fs::write(&present, "[display]\nbar_width = 12\n").unwrap();

        let config = Config::load_first([&missing, &present]).unwrap();
        assert_eq!(config.display.bar_width, 12);
    }

    #[test]
    fn test_malformed_default_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ajarin.toml");
        std::fs::write(&path, "[api]\nbase_url = ").unwrap();

        let err = Config::load_first([&path]).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: p, .. } if p == path));
    }

    #[test]
    fn test_no_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_first([&dir.path().join("absent.toml")]).unwrap();
        assert_eq!(config.display.bar_width, 40);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
