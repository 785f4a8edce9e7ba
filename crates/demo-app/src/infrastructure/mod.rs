//! Infrastructure layer for the demo application.
//!
//! Contains the adapters behind the application's ports: the `tracing`-backed
//! log sink, a recording sink for tests, and TOML configuration storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `point_core`, but MUST NOT be imported by the `application` or domain layers
//! (tests excepted).

pub mod log_sink;
pub mod storage;
