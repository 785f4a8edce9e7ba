//! Application layer use cases for the demo.
//!
//! Use cases here orchestrate the `point-core` domain and talk to the outside
//! world only through the [`log_port::LogSink`] trait, so they contain no
//! file system access and no logger wiring.
//!
//! # Sub-modules
//!
//! - **`classify_point`** – Pairs a point with its quadrant and formats the
//!   `"<point> is in quadrant: <n>"` message.
//!
//! - **`log_port`** – The logging collaborator's interface: severity levels,
//!   the `LogSink` trait, and the `LoggerSetup` record.
//!
//! - **`run_demo`** – The driver: announces the classification plus sample
//!   entries, then optionally echoes lines from an injected input source.

pub mod classify_point;
pub mod log_port;
pub mod run_demo;
