#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod landmarks;
mod name;
mod one_rep_max;
mod performance;
mod plan;
mod prescription;
mod service;
mod statistics;
mod training;
mod volume;
mod workout;

pub use error::{ReadError, StorageError, ValidationError, WriteError};
pub use exercise::{
    Exercise, ExerciseError, ExerciseRepository, ExerciseService, Muscle, MuscleError,
    MuscleGroup, Property, default_exercises,
};
pub use landmarks::{
    FrequencyRecommendation, GoalPreset, TrainingGoal, VolumeFocus, VolumeLandmarks,
    WORKING_SET_RIR_THRESHOLD,
};
pub use name::{Name, NameError};
pub use one_rep_max::{
    Formula, estimate_one_rep_max, inverse_brzycki, update_estimated_one_rep_max,
};
pub use performance::{
    PerformanceHistory, PerformanceHistoryRepository, PerformanceService, ProgressionPoint,
    SetEvaluation, update_performance_history,
};
pub use plan::{Day, DayKind, Plan, PlanDay, PlanExercise, PlanID, PlanRepository, PlanService};
pub use prescription::{
    BestPerformance, DEFAULT_INCREMENT, Prescription, previous_best_performance,
    recommended_weight, round_to_increment, suggest_next_set_weight, weight_for_reps,
};
pub use service::Service;
pub use statistics::{
    Interval, StatsSummary, Timeframe, month_start, stats_summary, volume_progression,
    week_start,
};
pub use training::{
    RIR, RIRError, RangeError, Reps, RepsError, SetRecord, TargetRange, Weight, WeightError,
};
pub use volume::{
    FrequencyStatus, MuscleFrequency, MuscleVolume, VolumeStatus, analyze_frequency,
    analyze_volume, classify_frequency, classify_volume, muscle_frequency, muscle_group_volume,
    muscle_volume, set_credit,
};
pub use workout::{Workout, WorkoutExercise, WorkoutID, WorkoutRepository, WorkoutService};
