//! Point demo entry point.
//!
//! Loads configuration, installs the `tracing` subscriber, classifies one
//! point and reports it through the log sink.  With `--interactive` it then
//! echoes stdin lines at every severity until end-of-input.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Cli::parse() + load_config_from()   -- TOML file, CLI overrides
//!  └─ AppConfig::logger_setup()           -- validated LoggerSetup
//!  └─ TracingLogSink::new(setup)
//!  └─ DemoRunner::new(point, sink)
//!       ├─ announce()                     -- classification + samples
//!       └─ echo_lines(stdin)              -- only with --interactive
//! ```
//!
//! # Usage
//!
//! ```text
//! demo-app [OPTIONS]
//!
//! Options:
//!   --config <PATH>       Config file [env: DEMOAPP_CONFIG]
//!   --x <X>               X coordinate of the point
//!   --y <Y>               Y coordinate of the point
//!   --level <LEVEL>       Minimum log level [env: DEMOAPP_LOG_LEVEL]
//!   --source <NAME>       Source name attached to entries
//!   --server <URI>        Log server address [env: DEMOAPP_SERVER]
//!   --fallback <PATH>     Fallback file of the logging service
//!   -i, --interactive     Echo stdin lines after the announcement
//!   --save-config         Write the effective configuration back to disk
//! ```
//!
//! `RUST_LOG` overrides the subscriber filter derived from `--level`.
//!
//! Any input read failure or sink failure ends the process with a non-zero
//! exit code.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use demo_app::application::log_port::LogLevel;
use demo_app::application::run_demo::DemoRunner;
use demo_app::infrastructure::log_sink::tracing_sink::TracingLogSink;
use demo_app::infrastructure::storage::config::{
    config_file_path, load_config_from, save_config_to, AppConfig, ConfigError,
};
use point_core::Point;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Classifies a point into its quadrant and reports it through the logger.
#[derive(Debug, Parser)]
#[command(name = "demo-app", version)]
struct Cli {
    /// Configuration file.  Defaults to the platform config directory.
    #[arg(long, env = "DEMOAPP_CONFIG")]
    config: Option<PathBuf>,

    /// X coordinate of the point to classify.
    #[arg(long, allow_hyphen_values = true)]
    x: Option<i32>,

    /// Y coordinate of the point to classify.
    #[arg(long, allow_hyphen_values = true)]
    y: Option<i32>,

    /// Minimum log level: debug, info, warn or error.
    #[arg(long, env = "DEMOAPP_LOG_LEVEL")]
    level: Option<LogLevel>,

    /// Source name attached to every entry.
    #[arg(long)]
    source: Option<String>,

    /// Remote log server address.
    #[arg(long, env = "DEMOAPP_SERVER")]
    server: Option<String>,

    /// Fallback file used by the logging service when the server is unreachable.
    #[arg(long)]
    fallback: Option<PathBuf>,

    /// Echo stdin lines after the announcement, until end-of-input.
    #[arg(short, long)]
    interactive: bool,

    /// Write the effective configuration to the config file.
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Applies the command-line overrides on top of `base`.
    fn apply(&self, mut base: AppConfig) -> AppConfig {
        let point = base.demo.point;
        base.demo.point = Point::new(self.x.unwrap_or(point.x()), self.y.unwrap_or(point.y()));
        if let Some(level) = self.level {
            base.logger.min_level = level;
        }
        if let Some(source) = &self.source {
            base.logger.source = source.clone();
        }
        if let Some(server) = &self.server {
            base.logger.server_uri = server.clone();
        }
        if let Some(fallback) = &self.fallback {
            base.logger.fallback_path = fallback.clone();
        }
        if self.interactive {
            base.demo.interactive = true;
        }
        base
    }

    /// The explicit `--config` path, or the platform default.
    fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config_file_path(),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicit --config must load; the platform default may be absent or
    // unusable, in which case the built-in defaults apply.
    let (base, default_load_error) = match (&cli.config, cli.config_path()) {
        (Some(_), Ok(path)) => {
            let cfg = load_config_from(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            (cfg, None)
        }
        (_, Ok(path)) => match load_config_from(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (AppConfig::default(), Some(e)),
        },
        (_, Err(e)) => (AppConfig::default(), Some(e)),
    };
    let config = cli.apply(base);
    let setup = config
        .logger_setup()
        .context("invalid logger configuration")?;

    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(setup.min_level.as_str())),
        )
        .init();

    if let Some(e) = default_load_error {
        warn!("using built-in configuration: {e}");
    }

    if cli.save_config {
        let path = cli.config_path().context("no config path to save to")?;
        save_config_to(&path, &config)
            .with_context(|| format!("failed to save config to {}", path.display()))?;
        info!("configuration saved to {}", path.display());
    }

    let runner = DemoRunner::new(config.demo.point, TracingLogSink::new(setup));
    runner
        .announce()
        .context("failed to deliver demo log entries")?;

    if config.demo.interactive {
        info!("reading stdin; end input to exit");
        let lines = runner
            .echo_lines(io::stdin().lock())
            .context("input loop aborted")?;
        info!("input ended after {lines} lines");
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_without_arguments_keeps_config_values() {
        // Arrange
        let cli = Cli::parse_from(["demo-app"]);
        let base = AppConfig::default();

        // Act
        let cfg = cli.apply(base.clone());

        // Assert
        assert_eq!(cfg, base);
    }

    #[test]
    fn test_cli_accepts_negative_coordinates() {
        let cli = Cli::parse_from(["demo-app", "--x", "-3", "--y", "-4"]);

        let cfg = cli.apply(AppConfig::default());

        assert_eq!(cfg.demo.point, Point::new(-3, -4));
    }

    #[test]
    fn test_cli_single_coordinate_keeps_the_other_from_config() {
        let cli = Cli::parse_from(["demo-app", "--y", "5"]);

        let cfg = cli.apply(AppConfig::default());

        assert_eq!(cfg.demo.point, Point::new(2, 5));
    }

    #[test]
    fn test_cli_overrides_logger_fields() {
        let cli = Cli::parse_from([
            "demo-app",
            "--level",
            "warning",
            "--source",
            "cli-app",
            "--server",
            "http://logs:7000",
            "--fallback",
            "other.cache",
        ]);

        let cfg = cli.apply(AppConfig::default());

        assert_eq!(cfg.logger.min_level, LogLevel::Warn);
        assert_eq!(cfg.logger.source, "cli-app");
        assert_eq!(cfg.logger.server_uri, "http://logs:7000");
        assert_eq!(cfg.logger.fallback_path, PathBuf::from("other.cache"));
    }

    #[test]
    fn test_cli_interactive_flag_enables_echo() {
        let cli = Cli::parse_from(["demo-app", "-i"]);
        assert!(cli.apply(AppConfig::default()).demo.interactive);
    }

    #[test]
    fn test_cli_rejects_unknown_level() {
        let result = Cli::try_parse_from(["demo-app", "--level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_explicit_config_path_is_used() {
        let cli = Cli::parse_from(["demo-app", "--config", "/tmp/demo.toml"]);
        assert_eq!(cli.config_path().unwrap(), PathBuf::from("/tmp/demo.toml"));
    }
}
