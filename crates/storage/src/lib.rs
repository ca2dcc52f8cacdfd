#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use gymapp_domain as domain;
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod log;
pub mod memory;
pub mod records;
pub mod repository;


pub use repository::Repository;

/// Keys of the values kept in the key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Key {
    #[strum(serialize = "userExercises")]
    Exercises,
    #[strum(serialize = "workoutPlans")]
    Plans,
    #[strum(serialize = "workoutHistory")]
    Workouts,
    #[strum(serialize = "performanceHistory")]
    PerformanceHistory,
    #[strum(serialize = "log")]
    Log,
}

/// Key-value store holding one JSON document per key.
pub trait Backend: Send + Sync + 'static {
    /// Read the value of a key. A missing key is not an error.
    fn read<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, domain::StorageError>;
    fn write<T: Serialize>(&self, key: Key, value: &T) -> Result<(), domain::StorageError>;
}
