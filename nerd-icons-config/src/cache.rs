//! Caller-owned config cache with modification-time based reload.
//!
//! Before each resolution the caller asks the cache for the config at a
//! path. The file is re-parsed when the path changed or its modification
//! time advanced. A failed stat is treated as "not modified": an existing
//! cached value keeps being served, and with an empty cache the load error
//! surfaces to the caller.

use crate::error::Result;
use crate::loader::{expand_tilde, load};
use crate::types::ParsedConfiguration;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

#[derive(Debug)]
struct CachedConfig {
    path: PathBuf,
    /// `None` when the file could not be stat'ed at load time.
    mtime: Option<SystemTime>,
    config: Arc<ParsedConfiguration>,
}

impl CachedConfig {
    fn is_stale(&self, path: &Path, mtime: Option<SystemTime>) -> bool {
        if self.path != path {
            return true;
        }
        match (mtime, self.mtime) {
            (Some(now), Some(then)) => now > then,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

/// Holds the last parsed configuration, keyed by path.
///
/// Safe to share between threads; the slot is guarded by a mutex.
#[derive(Debug, Default)]
pub struct ConfigCache {
    slot: Mutex<Option<CachedConfig>>,
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached value if it is stale for `path`.
    ///
    /// Returns `true` when a cached value was discarded.
    pub fn invalidate_if_stale(&self, path: impl AsRef<Path>) -> bool {
        let path = expand_tilde(path.as_ref());
        let mtime = modified(&path);
        let mut slot = self.slot.lock();
        if slot.as_ref().is_some_and(|c| c.is_stale(&path, mtime)) {
            log::debug!("Config cache stale for {:?}", path);
            *slot = None;
            return true;
        }
        false
    }

    /// Return the configuration for `path`, re-parsing it if stale.
    ///
    /// # Errors
    /// Propagates [`crate::ConfigError`] from [`load`] when a reload is needed
    /// and fails. The previously cached value is left in place in that case.
    pub fn get(&self, path: impl AsRef<Path>) -> Result<Arc<ParsedConfiguration>> {
        let path = expand_tilde(path.as_ref());
        let mtime = modified(&path);
        let mut slot = self.slot.lock();

        if let Some(cached) = slot.as_ref()
            && !cached.is_stale(&path, mtime)
        {
            log::trace!("Config cache hit for {:?}", path);
            return Ok(Arc::clone(&cached.config));
        }

        let config = Arc::new(load(&path)?);
        log::info!("Config (re)loaded from {:?}", path);
        *slot = Some(CachedConfig {
            path,
            mtime,
            config: Arc::clone(&config),
        });
        Ok(config)
    }

    /// Forget any cached configuration.
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }

    /// Whether a configuration is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.slot.lock().is_some()
    }
}
