use std::collections::BTreeMap;

use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Backend, Key, domain,
    records::{ExerciseLibrary, PerformanceHistory, Plans, RecordError, Workouts},
};

/// Implementation of all repositories on top of a key-value store.
///
/// A missing key reads as an empty collection.
pub struct Repository<B> {
    backend: B,
}

impl<B: Backend> Repository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read<R, T>(&self, key: Key) -> Result<T, domain::ReadError>
    where
        R: DeserializeOwned + Default + TryInto<T, Error = RecordError>,
    {
        let record: R = self.backend.read(key)?.unwrap_or_default();
        record.try_into().map_err(|err| {
            domain::StorageError::InvalidData {
                key: key.as_ref().to_string(),
                reason: err.to_string(),
            }
            .into()
        })
    }

    fn write<R: Serialize>(&self, key: Key, record: &R) -> Result<(), domain::WriteError> {
        self.backend.write(key, record)?;
        debug!("wrote {}", key.as_ref());
        Ok(())
    }
}

impl<B: Backend> domain::ExerciseRepository for Repository<B> {
    fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        self.read::<ExerciseLibrary, _>(Key::Exercises)
    }

    fn write_exercises(&self, exercises: &[domain::Exercise]) -> Result<(), domain::WriteError> {
        self.write(Key::Exercises, &ExerciseLibrary::from(exercises))
    }
}

impl<B: Backend> domain::PlanRepository for Repository<B> {
    fn read_plans(&self) -> Result<Vec<domain::Plan>, domain::ReadError> {
        self.read::<Plans, _>(Key::Plans)
    }

    fn write_plans(&self, plans: &[domain::Plan]) -> Result<(), domain::WriteError> {
        self.write(Key::Plans, &Plans::from(plans))
    }
}

impl<B: Backend> domain::WorkoutRepository for Repository<B> {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        self.read::<Workouts, _>(Key::Workouts)
    }

    fn write_workouts(&self, workouts: &[domain::Workout]) -> Result<(), domain::WriteError> {
        self.write(Key::Workouts, &Workouts::from(workouts))
    }
}

impl<B: Backend> domain::PerformanceHistoryRepository for Repository<B> {
    fn read_performance_history(
        &self,
    ) -> Result<BTreeMap<domain::Name, domain::PerformanceHistory>, domain::ReadError> {
        self.read::<PerformanceHistory, _>(Key::PerformanceHistory)
    }

    fn write_performance_history(
        &self,
        history: &BTreeMap<domain::Name, domain::PerformanceHistory>,
    ) -> Result<(), domain::WriteError> {
        self.write(Key::PerformanceHistory, &PerformanceHistory::from(history))
    }
}
