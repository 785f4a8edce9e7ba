//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration from the
//! platform-appropriate directory (or an explicit path), fills in defaults for
//! anything missing, and can write the effective configuration back to disk.

pub mod config;
