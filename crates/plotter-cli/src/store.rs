// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Picks where prefs live for this run.

use std::path::Path;

use anyhow::{Context, Result};
use plotter_app_core::config::{ConfigError, ConfigStore, MemoryConfigStore};
use plotter_config_fs::FsConfigStore;
use tracing::debug;

/// Either the on-disk store or a throwaway one for `--no-prefs`.
#[derive(Debug)]
pub enum PrefsStore {
    Fs(FsConfigStore),
    Memory(MemoryConfigStore),
}

impl PrefsStore {
    /// Base directory when backed by files.
    pub fn location(&self) -> Option<&Path> {
        match self {
            Self::Fs(fs) => Some(fs.base()),
            Self::Memory(_) => None,
        }
    }
}

impl ConfigStore for PrefsStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match self {
            Self::Fs(fs) => fs.load_raw(key),
            Self::Memory(mem) => mem.load_raw(key),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        match self {
            Self::Fs(fs) => fs.save_raw(key, data),
            Self::Memory(mem) => mem.save_raw(key, data),
        }
    }
}

pub fn open(no_prefs: bool, dir: Option<&Path>) -> Result<PrefsStore> {
    if no_prefs {
        debug!("prefs disabled; using in-memory store");
        return Ok(PrefsStore::Memory(MemoryConfigStore::new()));
    }
    let fs = match dir {
        Some(dir) => FsConfigStore::at(dir)
            .with_context(|| format!("failed to open prefs dir {}", dir.display()))?,
        None => FsConfigStore::new().context("failed to open platform config dir")?,
    };
    debug!(dir = %fs.base().display(), "prefs store");
    Ok(PrefsStore::Fs(fs))
}
