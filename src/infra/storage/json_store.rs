use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Flat key-value persistence: one JSON file holding a string-keyed map of
/// independent records. Every mutation rewrites the whole file. One writer
/// at a time, last write wins, no transactional guarantees across records.
pub struct JsonStore {
    path: PathBuf,
    records: Mutex<BTreeMap<String, Value>>,
}

impl JsonStore {
    /// Loads the file if it exists; a missing or corrupt file starts empty
    /// rather than failing, so a damaged store never blocks startup.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Store file {:?} is not valid JSON, starting empty: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No store file at {:?}, starting empty", path);
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let records = self.records.lock().expect("store mutex poisoned");
        match records.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        records.insert(key.to_string(), serde_json::to_value(value)?);
        self.flush(&records)
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        if records.remove(key).is_some() {
            self.flush(&records)?;
        }
        Ok(())
    }

    fn flush(&self, records: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}
