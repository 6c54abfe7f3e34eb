//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The interactive session owns the terminal, so it logs to a file. One-shot
//! subcommands log to stderr. `BTOX_LOG` overrides the level with a full
//! filter directive (e.g. `BTOX_LOG=btox::tui=trace`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "BTOX_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Standard error.
    #[default]
    Stderr,
    /// Append to a file, creating parent directories.
    File(PathBuf),
    /// Discard everything.
    Off,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            target: LogTarget::default(),
        }
    }
}

impl LogConfig {
    /// Map the `-v` count to a level: warn, info, debug, then trace.
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

    #[must_use]
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }
}

/// Default log file for interactive sessions: `<cache>/btox/btox.log`.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("btox").join("btox.log"))
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global subscriber. Call once, at startup.
///
/// # Errors
/// Returns an error if the log file or its directory cannot be created.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = build_env_filter(config.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match &config.target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            builder.with_writer(io::stderr).without_time().init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
