//! RunDemo use case: classify one point and report it through a [`LogSink`].
//!
//! The runner has two phases:
//!
//! 1. [`DemoRunner::announce`] sends the classification message followed by a
//!    fixed set of sample entries, one per severity, ending with an error that
//!    carries a cause.
//! 2. [`DemoRunner::echo_lines`] (optional) reads lines from an injected
//!    [`BufRead`] until end-of-stream and reports every line at each severity.
//!
//! The input source is a parameter rather than the process stdin, so both the
//! end-of-stream exit and the read-failure exit can be driven from tests.

use std::io::{self, BufRead};

use point_core::Point;
use thiserror::Error;

use super::classify_point::{classify, Classification};
use super::log_port::{LogSink, SinkError};

/// Sample entries sent by [`DemoRunner::announce`] after the classification.
pub const SAMPLE_DEBUG: &str = "demo sample: debug entry";
pub const SAMPLE_INFO: &str = "demo sample: info entry";
pub const SAMPLE_WARN: &str = "demo sample: warn entry";
pub const SAMPLE_ERROR: &str = "demo sample: error entry";

/// Prefix of the error entry that carries a cause.
pub const CAUSE_PREFIX: &str = "err: ";

/// Cause attached to the error entries produced by the runner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid argument: {0}")]
pub struct InvalidArgument(pub String);

/// Fatal errors that end a demo run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading from the input source failed.  The loop does not retry.
    #[error("failed to read input line {line}")]
    Input {
        /// 1-based number of the line that could not be read.
        line: usize,
        #[source]
        source: io::Error,
    },

    /// The logging collaborator refused an entry.
    #[error("log sink failed")]
    Sink(#[from] SinkError),
}

/// Drives one point through classification and reports it to `sink`.
pub struct DemoRunner<S> {
    classification: Classification,
    sink: S,
}

impl<S: LogSink> DemoRunner<S> {
    /// Classifies `point` up front; nothing is emitted until
    /// [`announce`](Self::announce) or [`echo_lines`](Self::echo_lines).
    pub fn new(point: Point, sink: S) -> Self {
        Self {
            classification: classify(point),
            sink,
        }
    }

    /// The classification computed at construction.
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Emits the classification message at info level, then the sample set.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Sink`] on the first entry the sink refuses.
    pub fn announce(&self) -> Result<(), RunError> {
        self.sink.info(&self.classification.message)?;
        self.sink.debug(SAMPLE_DEBUG)?;
        self.sink.info(SAMPLE_INFO)?;
        self.sink.warn(SAMPLE_WARN)?;
        self.sink.error(SAMPLE_ERROR)?;
        let cause = InvalidArgument(self.classification.point.to_string());
        self.sink.error_with_cause(CAUSE_PREFIX, &cause)?;
        Ok(())
    }

    /// Reads `input` line by line until end-of-stream, reporting each line.
    ///
    /// For every line the sink receives: the classification message (debug),
    /// the line at debug, info, warn and error, and an error carrying an
    /// [`InvalidArgument`] cause built from the line.  A line that parses as a
    /// [`Point`] additionally gets its own classification message at info.
    ///
    /// Returns the number of lines processed.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Input`] as soon as a read fails (including
    /// non-UTF-8 input) and [`RunError::Sink`] if the sink refuses an entry.
    pub fn echo_lines<R: BufRead>(&self, mut input: R) -> Result<usize, RunError> {
        let mut buf = String::new();
        let mut count = 0usize;

        loop {
            buf.clear();
            let read = input.read_line(&mut buf).map_err(|source| RunError::Input {
                line: count + 1,
                source,
            })?;
            if read == 0 {
                return Ok(count);
            }
            count += 1;
            self.report_line(trim_line_ending(&buf))?;
        }
    }

    fn report_line(&self, line: &str) -> Result<(), SinkError> {
        self.sink.debug(&self.classification.message)?;
        self.sink.debug(line)?;
        self.sink.info(line)?;
        self.sink.warn(line)?;
        self.sink.error(line)?;
        self.sink
            .error_with_cause(CAUSE_PREFIX, &InvalidArgument(line.to_string()))?;

        if let Ok(point) = line.parse::<Point>() {
            self.sink.info(&classify(point).message)?;
        }
        Ok(())
    }
}

/// Strips one trailing `\n` or `\r\n`.
fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
