//! Unified error type for tabmon.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the collector and the terminal loop.
///
/// Sampling code never lets these escape to the UI: the collector logs them
/// and substitutes zero or empty readings. Only terminal I/O and logging
/// setup failures reach `main`.
#[derive(Debug, Error)]
pub enum SysmonError {
    /// Terminal or filesystem I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// OS-provided data that could not be parsed.
    #[error("cannot parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, SysmonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_source() {
        let err = SysmonError::Parse {
            path: PathBuf::from("/proc/1/stat"),
            reason: "missing field".to_string(),
        };
        assert_eq!(err.to_string(), "cannot parse /proc/1/stat: missing field");
    }

    #[test]
    fn io_error_converts() {
        let err: SysmonError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, SysmonError::Io(_)));
    }
}
