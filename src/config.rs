//! Runtime configuration and logging setup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::errors::{Result, SysmonError};

/// Interval between metric samples. Fixed; not user configurable.
pub const TICK_RATE: Duration = Duration::from_secs(1);

/// Settings assembled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_rate: Duration,
    /// Log destination. Logging is off when unset, since the UI owns the terminal.
    pub log_file: Option<PathBuf>,
    /// 0 = info, 1 = debug, 2+ = trace.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            log_file: None,
            verbosity: 0,
        }
    }
}

impl Config {
    pub fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Installs the global tracing subscriber when a log file is configured.
pub fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let directive: Directive = format!("tabmon={}", config.log_level())
        .parse()
        .map_err(|e| SysmonError::Logging(format!("{e}")))?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| SysmonError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_level() {
        let mut config = Config::default();
        assert_eq!(config.log_level(), Level::INFO);
        config.verbosity = 1;
        assert_eq!(config.log_level(), Level::DEBUG);
        config.verbosity = 5;
        assert_eq!(config.log_level(), Level::TRACE);
    }

    #[test]
    fn logging_disabled_without_file() {
        assert!(init_logging(&Config::default()).is_ok());
    }

    #[test]
    fn default_tick_is_one_second() {
        assert_eq!(Config::default().tick_rate, Duration::from_secs(1));
    }
}
