use gloo_storage::{Storage as GlooStorage, errors::StorageError as GlooStorageError};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Backend, Key, domain};

/// The local storage of the browser.
pub struct LocalStorage;

impl Backend for LocalStorage {
    fn read<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, domain::StorageError> {
        match gloo_storage::LocalStorage::get(key.as_ref()) {
            Ok(value) => Ok(Some(value)),
            Err(err) => match err {
                GlooStorageError::KeyNotFound(_) => Ok(None),
                err => Err(storage_error(key, err)),
            },
        }
    }

    fn write<T: Serialize>(&self, key: Key, value: &T) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::set(key.as_ref(), value).map_err(|err| storage_error(key, err))
    }
}

fn storage_error(key: Key, err: GlooStorageError) -> domain::StorageError {
    match err {
        GlooStorageError::SerdeError(err) => domain::StorageError::InvalidData {
            key: key.as_ref().to_string(),
            reason: err.to_string(),
        },
        err => domain::StorageError::Other(err.to_string().into()),
    }
}
