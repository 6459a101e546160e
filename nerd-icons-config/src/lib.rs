//! Configuration system for nerd-icons.
//!
//! This crate turns the user's `config.yml` into a typed, immutable
//! [`ParsedConfiguration`]. It includes:
//!
//! - A restricted, indentation-based parser (not a general YAML parser)
//! - File loading with a hard size ceiling
//! - A caller-owned reload cache keyed on path and modification time
//! - Default values and default file locations
//!
//! Parsing is lenient: malformed lines are skipped and logged. The only hard
//! failures are the ones described by [`ConfigError`].

pub mod cache;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod ordered_map;
pub mod parser;
pub mod types;

pub use cache::ConfigCache;
pub use error::{ConfigError, Result};
pub use loader::{default_config_path, expand_tilde, load};
pub use ordered_map::OrderedMap;
pub use parser::{parse, parse_bool};
pub use types::{
    DetailedEntry, EntryColors, GlobalSettings, IconEntry, MAX_CONFIG_SIZE, MAX_PATTERN_LENGTH,
    ParsedConfiguration,
};
