// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port for plotter front ends.
//!
//! A [`ConfigStore`] moves opaque byte blobs keyed by a logical name;
//! [`ConfigService`] layers JSON on top. Absence is not an error at the
//! service level: a missing or empty blob loads as `None`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Where config blobs live.
pub trait ConfigStore {
    /// Raw blob stored under `key`; [`ConfigError::NotFound`] when absent.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces the blob stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failures reading or writing config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the key.
    #[error("no config stored under `{key}`")]
    NotFound {
        /// Logical name that was requested.
        key: String,
    },
    /// Backing storage failed.
    #[error("config i/o: {0}")]
    Io(#[from] std::io::Error),
    /// Blob is not valid JSON for the requested type.
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
    /// The store cannot be opened on this machine.
    #[error("config store unavailable: {0}")]
    Unavailable(String),
}

impl ConfigError {
    /// [`ConfigError::NotFound`] for `key`.
    pub fn not_found(key: &str) -> Self {
        Self::NotFound {
            key: key.to_owned(),
        }
    }
}

/// JSON (de)serialization over a [`ConfigStore`].
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decodes the value under `key`, or `None` if nothing (or an empty
    /// blob) is stored there.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Encodes `value` as pretty JSON under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.blobs.borrow().len()
    }

    /// `true` when nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.blobs.borrow().is_empty()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::not_found(key))
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        zoom: f32,
    }

    #[test]
    fn missing_and_empty_keys_load_as_none() {
        let svc = ConfigService::new(MemoryConfigStore::new());
        assert!(matches!(svc.load::<Sample>("absent"), Ok(None)));
        assert!(svc.store().save_raw("blank", &[]).is_ok());
        assert!(matches!(svc.load::<Sample>("blank"), Ok(None)));
    }

    #[test]
    fn save_then_load_returns_value() {
        let svc = ConfigService::new(MemoryConfigStore::new());
        let value = Sample {
            name: "grid".into(),
            zoom: 2.5,
        };
        assert!(svc.save("sample", &value).is_ok());
        assert_eq!(svc.store().len(), 1);
        let loaded = svc.load::<Sample>("sample");
        assert!(matches!(loaded, Ok(Some(ref v)) if *v == value));
    }

    #[test]
    fn malformed_blob_is_a_serde_error() {
        let svc = ConfigService::new(MemoryConfigStore::new());
        assert!(svc.store().save_raw("bad", b"{ not json").is_ok());
        assert!(matches!(
            svc.load::<Sample>("bad"),
            Err(ConfigError::Json(_))
        ));
    }
}
