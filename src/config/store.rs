//! Reloadable configuration handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::loader;
use crate::config::schema::ServiceConfig;

/// Holds the current configuration snapshot and its source path.
///
/// `current()` hands out the latest published `Arc<ServiceConfig>`;
/// `reload()` re-reads the source and swaps the pointer atomically.
/// A request that captured a snapshot before a reload keeps reading that
/// snapshot unchanged; the swap never tears an in-flight reader.
pub struct ConfigStore {
    current: ArcSwap<ServiceConfig>,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Create a store backed by an optional config file.
    ///
    /// The initial snapshot is loaded immediately; an absent or malformed
    /// file degrades to defaults rather than failing.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        let config = loader::load_or_default(path.as_deref());
        Self {
            current: ArcSwap::from_pointee(config),
            path,
        }
    }

    /// Create a store holding a fixed snapshot with no backing file.
    ///
    /// Reloading such a store republishes the defaults.
    pub fn from_config(config: ServiceConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
            path: None,
        }
    }

    /// The latest published snapshot.
    pub fn current(&self) -> Arc<ServiceConfig> {
        self.current.load_full()
    }

    /// Re-read the source and publish the result as the new snapshot.
    pub fn reload(&self) -> Arc<ServiceConfig> {
        let config = Arc::new(loader::load_or_default(self.path.as_deref()));
        self.current.store(config.clone());
        config
    }

    /// Path of the backing config file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
