//! Typed error variants for the nerd-icons-config crate.
//!
//! Loading can fail in exactly three ways; everything else the parser meets
//! is tolerated and skipped. Callers (the CLI in particular) match on the
//! variant to report each failure mode distinctly.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file is missing or could not be read.
    #[error("Cannot access config file: {}", path.display())]
    NotFound {
        /// Path that was requested (after `~` expansion).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is larger than [`crate::MAX_CONFIG_SIZE`].
    ///
    /// Raised before any byte of the file is parsed.
    #[error("Config file too large: {size} bytes (max {max}): {}", path.display())]
    TooLarge {
        /// Path of the oversized file.
        path: PathBuf,
        /// Observed size in bytes.
        size: u64,
        /// The enforced ceiling.
        max: u64,
    },

    /// A hard parse failure (currently only pattern-length violations).
    #[error("{}", format_parse_message(message, *line))]
    Parse {
        /// Human-readable description.
        message: String,
        /// 1-based source line, when known.
        line: Option<usize>,
    },
}

impl ConfigError {
    /// Build a [`ConfigError::Parse`] attached to a 1-based source line.
    pub fn parse_at(message: impl Into<String>, line: usize) -> Self {
        ConfigError::Parse {
            message: message.into(),
            line: Some(line),
        }
    }
}

fn format_parse_message(message: &str, line: Option<usize>) -> String {
    match line {
        Some(n) => format!("Line {n}: {message}"),
        None => message.to_string(),
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_includes_line() {
        let err = ConfigError::parse_at("Regex pattern too long", 12);
        assert_eq!(err.to_string(), "Line 12: Regex pattern too long");
    }

    #[test]
    fn test_parse_error_without_line() {
        let err = ConfigError::Parse {
            message: "bad".to_string(),
            line: None,
        };
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_too_large_message() {
        let err = ConfigError::TooLarge {
            path: PathBuf::from("/tmp/config.yml"),
            size: 2_000_000,
            max: 1_048_576,
        };
        let msg = err.to_string();
        assert!(msg.contains("2000000 bytes"));
        assert!(msg.contains("max 1048576"));
    }
}
