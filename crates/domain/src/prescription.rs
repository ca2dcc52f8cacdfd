use chrono::NaiveDateTime;

use crate::{
    Formula, Name, PerformanceHistory, PlanExercise, SetRecord, TargetRange, Workout,
    estimate_one_rep_max, inverse_brzycki,
};

/// Smallest weight step of common plates and dumbbells in kg.
pub const DEFAULT_INCREMENT: f32 = 2.5;

/// Relative weight change per signal of over- or underperformance.
const ADJUSTMENT: f32 = 0.05;

/// Targets a set is prescribed with.
pub trait Prescription {
    fn rep_range(&self) -> TargetRange;
    fn rir_range(&self) -> TargetRange;
}

impl Prescription for PlanExercise {
    fn rep_range(&self) -> TargetRange {
        self.rep_range
    }

    fn rir_range(&self) -> TargetRange {
        self.rir_range
    }
}

#[must_use]
pub fn round_to_increment(weight: f32, increment: f32) -> f32 {
    if increment > 0.0 {
        (weight / increment).round() * increment
    } else {
        weight
    }
}

/// Weight that allows `target_reps` reps with `target_rir` reps in reserve.
///
/// Returns zero if there is no usable one-repetition maximum.
#[must_use]
pub fn weight_for_reps(one_rep_max: f32, target_reps: u32, target_rir: u32, increment: f32) -> f32 {
    if one_rep_max.is_nan() || one_rep_max <= 0.0 || target_reps == 0 {
        return 0.0;
    }

    round_to_increment(
        inverse_brzycki(one_rep_max, target_reps.saturating_add(target_rir)),
        increment,
    )
}

/// Starting weight for an exercise based on the estimated one-repetition maximum.
///
/// Zero means that there is no basis for a recommendation and the user has
/// to choose a starting weight.
#[must_use]
pub fn recommended_weight(
    exercise: &impl Prescription,
    history: Option<&PerformanceHistory>,
    increment: f32,
) -> f32 {
    let Some(history) = history else {
        return 0.0;
    };

    if history.estimated_one_rep_max <= 0.0 {
        return 0.0;
    }

    weight_for_reps(
        history.estimated_one_rep_max,
        exercise.rep_range().midpoint(),
        exercise.rir_range().midpoint(),
        increment,
    )
}

/// Weight for the next set, adjusted by the performance of the last set.
///
/// Reps and reps in reserve outside of their target ranges each change the
/// weight by 5 %.
#[must_use]
pub fn suggest_next_set_weight(
    exercise: &impl Prescription,
    last_set: &SetRecord,
    increment: f32,
) -> f32 {
    let weight = f32::from(last_set.weight);
    let reps = u32::from(last_set.reps);
    let rir = u32::from(last_set.rir);

    if weight <= 0.0 || reps == 0 {
        return weight.max(0.0);
    }

    let rep_range = exercise.rep_range();
    let rir_range = exercise.rir_range();
    let mut factor = 1.0;

    if reps < rep_range.min {
        factor *= 1.0 - ADJUSTMENT;
    } else if reps > rep_range.max {
        factor *= 1.0 + ADJUSTMENT;
    }

    if rir < rir_range.min {
        factor *= 1.0 - ADJUSTMENT;
    } else if rir > rir_range.max {
        factor *= 1.0 + ADJUSTMENT;
    }

    round_to_increment(weight * factor, increment)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestPerformance {
    pub date: NaiveDateTime,
    pub weight: f32,
    pub reps: u32,
    pub rir: u32,
    pub volume: f32,
    pub estimated_one_rep_max: f32,
}

/// Completed set of an exercise with the highest volume (weight × reps).
///
/// Of multiple sets with the same volume, the first one in the order of the
/// workouts is chosen.
#[must_use]
pub fn previous_best_performance(name: &Name, workouts: &[Workout]) -> Option<BestPerformance> {
    let mut best: Option<BestPerformance> = None;

    for workout in workouts {
        for set in workout
            .exercises
            .iter()
            .filter(|e| e.name == *name)
            .flat_map(|e| &e.sets)
            .filter(|s| s.is_valid())
        {
            let volume = set.volume();
            if best.as_ref().is_none_or(|b| volume > b.volume) {
                let weight = f32::from(set.weight);
                let reps = u32::from(set.reps);
                let rir = u32::from(set.rir);
                best = Some(BestPerformance {
                    date: workout.start_time,
                    weight,
                    reps,
                    rir,
                    volume,
                    estimated_one_rep_max: estimate_one_rep_max(
                        weight,
                        reps,
                        rir,
                        Formula::Brzycki,
                    ),
                });
            }
        }
    }

    best
}
