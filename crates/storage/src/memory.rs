use std::{collections::BTreeMap, sync::Mutex};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Backend, Key, domain};

/// Volatile store keeping the serialized JSON documents in memory.
#[derive(Default)]
pub struct Memory {
    values: Mutex<BTreeMap<String, String>>,
}

impl Memory {
    /// Store a raw JSON document, e.g. data written by an older version of the application.
    pub fn insert_raw(&self, key: Key, json: &str) -> Result<(), domain::StorageError> {
        self.values
            .lock()
            .map_err(|_| domain::StorageError::Unavailable)?
            .insert(key.as_ref().to_string(), json.to_string());
        Ok(())
    }

    pub fn raw(&self, key: Key) -> Result<Option<String>, domain::StorageError> {
        Ok(self
            .values
            .lock()
            .map_err(|_| domain::StorageError::Unavailable)?
            .get(key.as_ref())
            .cloned())
    }
}

impl Backend for Memory {
    fn read<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, domain::StorageError> {
        self.raw(key)?
            .map(|json| {
                serde_json::from_str(&json).map_err(|err| domain::StorageError::InvalidData {
                    key: key.as_ref().to_string(),
                    reason: err.to_string(),
                })
            })
            .transpose()
    }

    fn write<T: Serialize>(&self, key: Key, value: &T) -> Result<(), domain::StorageError> {
        let json =
            serde_json::to_string(value).map_err(|err| domain::StorageError::Other(err.into()))?;
        self.insert_raw(key, &json)
    }
}
