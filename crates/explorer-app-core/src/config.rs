// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config_port::ConfigPort;
use crate::prefs::{ExplorerPrefs, PREFS_KEY};

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Serializes config values as JSON and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize the value for `key`. `Ok(None)` if missing or empty.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist the value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

impl<S> ConfigPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> Option<ExplorerPrefs> {
        match self.load(PREFS_KEY) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(?err, "ignoring unreadable prefs; using defaults");
                None
            }
        }
    }

    fn save_prefs(&self, prefs: &ExplorerPrefs) -> Result<(), ConfigError> {
        self.save(PREFS_KEY, prefs)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use explorer_core::ViewMode;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemStore {
        blobs: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl ConfigStore for MemStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
            self.blobs
                .borrow()
                .get(key)
                .cloned()
                .ok_or(ConfigError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
            self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_and_empty_blobs_load_as_none() {
        let svc = ConfigService::new(MemStore::default());
        assert!(svc.load::<ExplorerPrefs>("prefs").unwrap().is_none());
        svc.store().save_raw("prefs", b"").unwrap();
        assert!(svc.load::<ExplorerPrefs>("prefs").unwrap().is_none());
    }

    #[test]
    fn prefs_survive_save_and_load() {
        let svc = ConfigService::new(MemStore::default());
        let prefs = ExplorerPrefs {
            view_mode: ViewMode::Advanced,
            ..ExplorerPrefs::default()
        };
        svc.save_prefs(&prefs).unwrap();
        assert_eq!(svc.load_prefs(), Some(prefs));
    }

    #[test]
    fn corrupt_prefs_fall_back_to_none() {
        let svc = ConfigService::new(MemStore::default());
        svc.store().save_raw(PREFS_KEY, b"{not json").unwrap();
        assert!(matches!(
            svc.load::<ExplorerPrefs>(PREFS_KEY),
            Err(ConfigError::Serde(_))
        ));
        assert_eq!(svc.load_prefs(), None);
    }
}
