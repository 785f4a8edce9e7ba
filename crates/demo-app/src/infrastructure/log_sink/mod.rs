//! Log sink adapters implementing the application's `LogSink` port.
//!
//! - [`tracing_sink::TracingLogSink`] forwards entries to the `tracing`
//!   subscriber installed by `main`.
//! - [`mock::RecordingLogSink`] keeps entries in memory so tests can assert on
//!   exactly what was emitted and in what order.
//!
//! The remote transport and fallback file of the real logging service are
//! outside this crate; the tracing sink only reports where they would point.

pub mod mock;
pub mod tracing_sink;
