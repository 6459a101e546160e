//! Config file loading and path resolution.

use crate::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{ConfigError, Result};
use crate::parser;
use crate::types::{MAX_CONFIG_SIZE, ParsedConfiguration};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location: `~/.config/nerd-icons/config.yml`.
///
/// Falls back to a relative `config.yml` if the home directory is unknown.
pub fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home
            .join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Expand a leading `~` or `~/` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    match (s.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Load and parse a config file.
///
/// The size ceiling is checked from metadata before the file is read.
///
/// # Errors
/// - [`ConfigError::NotFound`] if the file cannot be stat'ed or read
/// - [`ConfigError::TooLarge`] if it exceeds [`MAX_CONFIG_SIZE`] bytes
/// - [`ConfigError::Parse`] for pattern-length violations
pub fn load(path: impl AsRef<Path>) -> Result<ParsedConfiguration> {
    let path = expand_tilde(path.as_ref());

    let size = fs::metadata(&path)
        .map_err(|source| ConfigError::NotFound {
            path: path.clone(),
            source,
        })?
        .len();

    if size > MAX_CONFIG_SIZE {
        return Err(ConfigError::TooLarge {
            path,
            size,
            max: MAX_CONFIG_SIZE,
        });
    }

    let bytes = fs::read(&path).map_err(|source| ConfigError::NotFound {
        path: path.clone(),
        source,
    })?;
    let contents = String::from_utf8_lossy(&bytes);

    log::debug!("Loading config from {:?} ({} bytes)", path, size);
    parser::parse(&contents)
}
