//! Log bridge for the `nerd-icons` binary.
//!
//! Routes every `log::*!` record from all crates to a file in the temp
//! directory (`nerd_icons_debug.log`). tmux captures the binary's stdout for
//! the status line, so nothing is written there.
//!
//! Level, highest precedence first:
//! - the `--log-level` CLI flag
//! - `RUST_LOG` (a plain level name such as `debug`)
//! - `DEBUG_LEVEL`: 0 off, 1 error, 2 info, 3 debug, 4 trace
//!
//! With `--debug` records are mirrored to stderr as well.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

pub const LOG_FILE_NAME: &str = "nerd_icons_debug.log";

/// Location of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Map a `DEBUG_LEVEL` value to a level filter.
pub fn level_from_debug_level(value: &str) -> LevelFilter {
    match value.trim().parse::<u8>() {
        Ok(1) => LevelFilter::Error,
        Ok(2) => LevelFilter::Info,
        Ok(3) => LevelFilter::Debug,
        Ok(4) => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Level requested through the environment, if any.
pub fn level_from_env() -> Option<LevelFilter> {
    if let Ok(value) = std::env::var("RUST_LOG")
        && let Ok(level) = LevelFilter::from_str(value.trim())
    {
        return Some(level);
    }
    std::env::var("DEBUG_LEVEL")
        .ok()
        .map(|value| level_from_debug_level(&value))
}

struct FileLogger {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl FileLogger {
    fn format(record: &Record<'_>) -> String {
        format!(
            "[{}] [{:<5}] [{}] {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        if let Some(file) = self.file.lock().as_mut() {
            // A failed write must never disturb the status line
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn open_log_file() -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
        .ok()
}

/// Install the bridge as the global `log` logger.
///
/// `cli_level` overrides the environment. `mirror_stderr` turns logging on
/// at `debug` when no level was requested. Calling this more than once has
/// no effect.
pub fn init_log_bridge(cli_level: Option<LevelFilter>, mirror_stderr: bool) {
    let level = cli_level
        .or_else(level_from_env)
        .unwrap_or(if mirror_stderr {
            LevelFilter::Debug
        } else {
            LevelFilter::Off
        });

    if level == LevelFilter::Off {
        log::set_max_level(LevelFilter::Off);
        return;
    }

    let logger = LOGGER.get_or_init(|| FileLogger {
        level,
        file: Mutex::new(open_log_file()),
        mirror_stderr,
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
        log::info!(
            "nerd-icons {} logging at {} to {}",
            crate::VERSION,
            level,
            log_path().display()
        );
    }
}
