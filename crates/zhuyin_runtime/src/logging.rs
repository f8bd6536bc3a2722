//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so they never interleave with the game screen
//! on stdout.
//!
//! # Log Levels
//!
//! - `warn`: levels cut short because the vocabulary ran out
//! - `info`: level start and completion
//! - `debug`: generation details and every applied command
//! - `trace`: everything else

use std::io;

use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use zhuyin_foundation::{Error, Result};

const WORKSPACE_CRATES: [&str; 5] = [
    "zhuyin",
    "zhuyin_foundation",
    "zhuyin_catalog",
    "zhuyin_engine",
    "zhuyin_runtime",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Most verbose level shown for workspace crates.
    pub level: Level,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Whether to include the module path of each event.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Creates a `LogConfig` from CLI verbosity count.
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Only errors; used by `--quiet`.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            level: Level::ERROR,
            ..Default::default()
        }
    }

    /// Set log level directly.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Enable or disable the module path in output.
    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    /// Returns the filter directives for this configuration.
    ///
    /// Workspace crates log at the configured level; dependencies stay at
    /// `warn`.
    #[must_use]
    pub fn directives(&self) -> String {
        let level = self.level.as_str().to_lowercase();
        let mut directives = String::from("warn");
        for name in WORKSPACE_CRATES {
            directives.push(',');
            directives.push_str(name);
            directives.push('=');
            directives.push_str(&level);
        }
        directives
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG`, when set, overrides the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    init_logging_with_writer(config, io::stderr)
}

/// Installs the global subscriber with a custom writer.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config);
    let layer = fmt::layer()
        .compact()
        .without_time()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| Error::internal(format!("logging already initialised: {e}")))
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directives()))
}
