//! demo-app library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! The binary classifies one [`point_core::Point`], reports the result and a
//! handful of sample entries through the logging port, and can then echo
//! lines read from stdin at every severity until end-of-input.

/// Application layer: use cases and the logging port.
pub mod application;

/// Infrastructure layer: log sink adapters and configuration storage.
pub mod infrastructure;
