//! Logging port: the narrow interface through which the demo reaches its
//! logging collaborator.
//!
//! The application never talks to a concrete logger.  It calls
//! [`LogSink::emit`] with a severity, a message, and an optional cause; the
//! infrastructure layer decides where the entry ends up.  Tests inject a
//! recording implementation (see `infrastructure::log_sink::mock`).

use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default source name attached to every entry.
pub const DEFAULT_SOURCE: &str = "demo-app";

/// Default remote log server address.
pub const DEFAULT_SERVER_URI: &str = "http://localhost:9999";

/// Severity of a log entry, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl LogLevel {
    /// Lower-case name, also accepted by [`LogLevel::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`LogLevel`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level {0:?} (expected debug, info, warn or error)")]
pub struct UnknownLogLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(UnknownLogLevel(s.to_string())),
        }
    }
}

/// Error reported by a [`LogSink`] that could not accept an entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The sink refused this particular entry.
    #[error("log entry rejected: {0}")]
    Rejected(String),

    /// The sink cannot accept any entries right now.
    #[error("log sink unavailable: {0}")]
    Unavailable(String),
}

/// Settings for the logging collaborator.
///
/// An immutable record handed to the sink's constructor; there is no
/// builder and no way to change it after the sink is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSetup {
    /// Entries below this level are discarded.
    pub min_level: LogLevel,
    /// Application name attached to every entry.
    pub source: String,
    /// Local file the collaborator falls back to when the server is unreachable.
    pub fallback_path: PathBuf,
    /// Remote log server address.
    pub server_uri: http::Uri,
}

impl Default for LoggerSetup {
    fn default() -> Self {
        Self {
            min_level: LogLevel::default(),
            source: DEFAULT_SOURCE.to_string(),
            fallback_path: default_fallback_path(),
            server_uri: http::Uri::from_static(DEFAULT_SERVER_URI),
        }
    }
}

/// `Cache/Logs.cache`, relative to the working directory.
pub fn default_fallback_path() -> PathBuf {
    PathBuf::from("Cache").join("Logs.cache")
}

/// The logging collaborator as seen by the application layer.
///
/// Only [`emit`](LogSink::emit) must be implemented; the per-level helpers
/// forward to it.
pub trait LogSink {
    /// Delivers one entry.  `cause` carries the error an error-level entry
    /// is reporting, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the entry could not be delivered.
    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), SinkError>;

    fn debug(&self, message: &str) -> Result<(), SinkError> {
        self.emit(LogLevel::Debug, message, None)
    }

    fn info(&self, message: &str) -> Result<(), SinkError> {
        self.emit(LogLevel::Info, message, None)
    }

    fn warn(&self, message: &str) -> Result<(), SinkError> {
        self.emit(LogLevel::Warn, message, None)
    }

    fn error(&self, message: &str) -> Result<(), SinkError> {
        self.emit(LogLevel::Error, message, None)
    }

    /// Emits an error-level entry together with the error that caused it.
    fn error_with_cause(
        &self,
        message: &str,
        cause: &(dyn StdError + 'static),
    ) -> Result<(), SinkError> {
        self.emit(LogLevel::Error, message, Some(cause))
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), SinkError> {
        (**self).emit(level, message, cause)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), SinkError> {
        (**self).emit(level, message, cause)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
