use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::{
    DEFAULT_INCREMENT, Formula, Name, Prescription, ReadError, SetRecord, Workout, WriteError,
    estimate_one_rep_max, recommended_weight, suggest_next_set_weight,
    update_estimated_one_rep_max,
};

pub trait PerformanceService {
    fn get_performance_history(&self) -> Result<BTreeMap<Name, PerformanceHistory>, ReadError>;

    fn get_recommended_weight(
        &self,
        name: &Name,
        exercise: &impl Prescription,
    ) -> Result<f32, ReadError> {
        Ok(recommended_weight(
            exercise,
            self.get_performance_history()?.get(name),
            DEFAULT_INCREMENT,
        ))
    }

    fn get_next_set_weight(&self, exercise: &impl Prescription, last_set: &SetRecord) -> f32 {
        suggest_next_set_weight(exercise, last_set, DEFAULT_INCREMENT)
    }

    fn get_estimated_one_rep_max_progression(
        &self,
        name: &Name,
    ) -> Result<Vec<ProgressionPoint>, ReadError> {
        Ok(self
            .get_performance_history()?
            .remove(name)
            .map(|h| h.progression)
            .unwrap_or_default())
    }
}

pub trait PerformanceHistoryRepository {
    fn read_performance_history(&self) -> Result<BTreeMap<Name, PerformanceHistory>, ReadError>;
    fn write_performance_history(
        &self,
        history: &BTreeMap<Name, PerformanceHistory>,
    ) -> Result<(), WriteError>;
}

/// Strength development of a single exercise.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PerformanceHistory {
    pub estimated_one_rep_max: f32,
    pub sets: Vec<SetEvaluation>,
    pub progression: Vec<ProgressionPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetEvaluation {
    pub date: NaiveDateTime,
    pub weight: f32,
    pub reps: u32,
    pub rir: u32,
    pub estimated_one_rep_max: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionPoint {
    pub date: NaiveDateTime,
    pub estimated_one_rep_max: f32,
}

/// Fold a completed workout into the performance history.
///
/// Every completed set is recorded. The set with the highest estimated
/// one-repetition maximum of each exercise updates the estimate and adds a
/// point to the progression.
#[must_use]
pub fn update_performance_history(
    workout: &Workout,
    history: &BTreeMap<Name, PerformanceHistory>,
) -> BTreeMap<Name, PerformanceHistory> {
    let mut history = history.clone();

    for exercise in &workout.exercises {
        let entry = history.entry(exercise.name.clone()).or_default();
        let mut best: Option<SetEvaluation> = None;

        for set in exercise.sets.iter().filter(|s| s.is_valid()) {
            let weight = f32::from(set.weight);
            let reps = u32::from(set.reps);
            let rir = u32::from(set.rir);
            let evaluation = SetEvaluation {
                date: workout.start_time,
                weight,
                reps,
                rir,
                estimated_one_rep_max: estimate_one_rep_max(weight, reps, rir, Formula::Brzycki),
            };

            entry.sets.push(evaluation);

            if evaluation.estimated_one_rep_max
                > best.map_or(0.0, |b| b.estimated_one_rep_max)
            {
                best = Some(evaluation);
            }
        }

        if let Some(best) = best {
            entry.estimated_one_rep_max = update_estimated_one_rep_max(
                Some(entry.estimated_one_rep_max),
                best.weight,
                best.reps,
                best.rir,
            );
            entry.progression.push(ProgressionPoint {
                date: workout.start_time,
                estimated_one_rep_max: entry.estimated_one_rep_max,
            });
        }
    }

    history
}
