//! `tracing`-backed implementation of the [`LogSink`] port.
//!
//! Entries below the configured minimum level are discarded here, before they
//! reach the subscriber.  Accepted entries become `tracing` events carrying a
//! `source` field and, when present, a `cause` field with the error's
//! `Display` text.
//!
//! The remote server and fallback file from [`LoggerSetup`] are reported once
//! when the sink is created.  Delivering to them is the job of the external
//! logging service, not of this adapter.

use std::error::Error as StdError;

use tracing::{debug, error, info, warn};

use crate::application::log_port::{LogLevel, LogSink, LoggerSetup, SinkError};

/// Emits one event through the given `tracing` macro, with or without a cause.
macro_rules! forward {
    ($mac:ident, $source:expr, $message:expr, $cause:expr) => {
        match $cause {
            Some(cause) => $mac!(source = %$source, cause = %cause, "{}", $message),
            None => $mac!(source = %$source, "{}", $message),
        }
    };
}

/// Production log sink.
#[derive(Debug)]
pub struct TracingLogSink {
    setup: LoggerSetup,
}

impl TracingLogSink {
    /// Creates the sink and logs where the logging service is pointed.
    pub fn new(setup: LoggerSetup) -> Self {
        info!(
            source = %setup.source,
            min_level = %setup.min_level,
            server = %setup.server_uri,
            fallback = %setup.fallback_path.display(),
            "logger configured"
        );
        Self { setup }
    }

    /// The setup this sink was created with.
    pub fn setup(&self) -> &LoggerSetup {
        &self.setup
    }

    /// Returns `true` if entries at `level` pass the minimum-level filter.
    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.setup.min_level
    }
}

impl LogSink for TracingLogSink {
    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), SinkError> {
        if !self.accepts(level) {
            return Ok(());
        }
        let source = self.setup.source.as_str();
        match level {
            LogLevel::Debug => forward!(debug, source, message, cause),
            LogLevel::Info => forward!(info, source, message, cause),
            LogLevel::Warn => forward!(warn, source, message, cause),
            LogLevel::Error => forward!(error, source, message, cause),
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
