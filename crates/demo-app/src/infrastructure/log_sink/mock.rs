//! Recording log sink for unit and integration tests.
//!
//! Every accepted entry is pushed into a `Mutex<Vec<LogEntry>>` so assertions
//! can inspect the exact sequence of levels, messages and causes.
//!
//! # `fail_on`
//!
//! Set `fail_on = Some(level)` (or build with
//! [`RecordingLogSink::failing_on`]) to make every entry at that level return
//! [`SinkError::Rejected`].  Rejected entries are not recorded.  This drives the
//! fatal sink-failure path of callers without a broken logger.

use std::error::Error as StdError;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::application::log_port::{LogLevel, LogSink, SinkError};

/// One entry as seen by the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// `Display` text of the cause, if one was attached.
    pub cause: Option<String>,
}

/// A sink that records entries instead of delivering them anywhere.
#[derive(Debug, Default)]
pub struct RecordingLogSink {
    /// Entries in emission order.
    pub entries: Mutex<Vec<LogEntry>>,
    /// Level whose entries are rejected, if any.
    pub fail_on: Option<LogLevel>,
}

impl RecordingLogSink {
    /// Creates an empty sink that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that rejects every entry at `level`.
    pub fn failing_on(level: LogLevel) -> Self {
        Self {
            fail_on: Some(level),
            ..Self::default()
        }
    }

    /// Returns a snapshot of the recorded entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Returns the recorded messages at `level`, in order.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for RecordingLogSink {
    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), SinkError> {
        if self.fail_on == Some(level) {
            return Err(SinkError::Rejected(format!("mock rejects {level} entries")));
        }
        self.lock().push(LogEntry {
            level,
            message: message.to_string(),
            cause: cause.map(|c| c.to_string()),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_entries_in_order() {
        // Arrange
        let sink = RecordingLogSink::new();

        // Act
        sink.warn("first").unwrap();
        sink.debug("second").unwrap();

        // Assert
        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[1].message, "second");
    }

    #[test]
    fn test_recording_sink_stores_cause_text() {
        let sink = RecordingLogSink::new();
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");

        sink.error_with_cause("err: ", &cause).unwrap();

        assert_eq!(sink.entries()[0].cause.as_deref(), Some("disk gone"));
    }

    #[test]
    fn test_recording_sink_rejects_configured_level_without_recording() {
        let sink = RecordingLogSink::failing_on(LogLevel::Info);

        assert!(sink.debug("kept").is_ok());
        assert!(matches!(sink.info("dropped"), Err(SinkError::Rejected(_))));
        assert_eq!(sink.messages_at(LogLevel::Debug), vec!["kept"]);
        assert!(sink.messages_at(LogLevel::Info).is_empty());
    }
}
