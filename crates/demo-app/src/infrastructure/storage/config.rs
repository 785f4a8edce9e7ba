//! TOML-based configuration for the demo application.
//!
//! The default location is the platform config directory:
//! - Windows:  `%APPDATA%\DemoApp\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/demoapp/config.toml` (or `~/.config/...`)
//! - macOS:    `~/Library/Application Support/DemoApp/config.toml`
//!
//! Example:
//!
//! ```toml
//! [logger]
//! min_level = "info"
//! source = "demo-app"
//! fallback_path = "Cache/Logs.cache"
//! server_uri = "http://localhost:9999"
//!
//! [demo]
//! point = { x = 2, y = -1 }
//! interactive = false
//! ```
//!
//! Every field has a serde default, so an empty or partial file is valid and a
//! missing file yields [`AppConfig::default()`].

use std::path::{Path, PathBuf};

use point_core::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::log_port::{
    default_fallback_path, LogLevel, LoggerSetup, DEFAULT_SERVER_URI, DEFAULT_SOURCE,
};

/// X coordinate of the point classified when nothing else is configured.
pub const DEFAULT_X: i32 = 2;

/// Y coordinate of the point classified when nothing else is configured.
pub const DEFAULT_Y: i32 = -1;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `logger.server_uri` is not an absolute URI with a host.
    #[error("invalid log server URI {uri:?}: {reason}")]
    InvalidServerUri { uri: String, reason: String },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub logger: LoggerConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Settings handed to the logging collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggerConfig {
    /// Minimum level: `"debug"`, `"info"`, `"warn"` or `"error"`.
    #[serde(default)]
    pub min_level: LogLevel,
    /// Application name attached to every entry.
    #[serde(default = "default_source")]
    pub source: String,
    /// File used by the logging service when the server is unreachable.
    #[serde(default = "default_fallback_path")]
    pub fallback_path: PathBuf,
    /// Remote log server, e.g. `"http://localhost:9999"`.
    #[serde(default = "default_server_uri")]
    pub server_uri: String,
}

/// What the demo classifies and whether it reads stdin afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// Echo stdin lines after the announcement.
    #[serde(default)]
    pub interactive: bool,
    #[serde(default = "default_point")]
    pub point: Point,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}
fn default_server_uri() -> String {
    DEFAULT_SERVER_URI.to_string()
}
fn default_point() -> Point {
    Point::new(DEFAULT_X, DEFAULT_Y)
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::default(),
            source: default_source(),
            fallback_path: default_fallback_path(),
            server_uri: default_server_uri(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            interactive: false,
            point: default_point(),
        }
    }
}

impl AppConfig {
    /// Validates the logger section and turns it into a [`LoggerSetup`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerUri`] when `server_uri` does not
    /// parse, or has no scheme or host.
    pub fn logger_setup(&self) -> Result<LoggerSetup, ConfigError> {
        let raw = self.logger.server_uri.trim();
        let invalid = |reason: String| ConfigError::InvalidServerUri {
            uri: raw.to_string(),
            reason,
        };

        let server_uri: http::Uri = raw
            .parse()
            .map_err(|e: http::uri::InvalidUri| invalid(e.to_string()))?;
        if server_uri.scheme().is_none() {
            return Err(invalid("missing scheme".to_string()));
        }
        if server_uri.host().is_none() {
            return Err(invalid("missing host".to_string()));
        }

        Ok(LoggerSetup {
            min_level: self.logger.min_level,
            source: self.logger.source.clone(),
            fallback_path: self.logger.fallback_path.clone(),
            server_uri,
        })
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the default location.
///
/// # Errors
///
/// See [`config_file_path`] and [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config base directory including the `DemoApp` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("DemoApp"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("demoapp"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("DemoApp")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
