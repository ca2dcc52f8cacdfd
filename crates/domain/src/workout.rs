use chrono::{Duration, NaiveDate, NaiveDateTime};
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    BestPerformance, Day, DayKind, Name, Plan, PlanExercise, PlanID, Prescription, ReadError,
    SetRecord, StatsSummary, TargetRange, Timeframe, Weight, WriteError, suggest_next_set_weight,
};

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;

    /// Store a finished workout and fold its sets into the performance history.
    fn complete_workout(&self, workout: Workout) -> Result<Workout, WriteError>;

    fn get_previous_best_performance(
        &self,
        name: &Name,
    ) -> Result<Option<BestPerformance>, ReadError>;

    fn get_stats_summary(&self, today: NaiveDate) -> Result<StatsSummary, ReadError>;

    fn get_volume_progression(
        &self,
        timeframe: Timeframe,
        today: NaiveDate,
    ) -> Result<Vec<(NaiveDate, f32)>, ReadError>;
}

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn write_workouts(&self, workouts: &[Workout]) -> Result<(), WriteError>;
}

/// A performed training session.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub plan_id: Option<PlanID>,
    pub day: Day,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub notes: String,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    /// Start a workout for a day of a plan. Only training days carry exercises.
    #[must_use]
    pub fn start(id: WorkoutID, plan: &Plan, day: Day, start_time: NaiveDateTime) -> Self {
        let exercises = match plan.days.get(&day) {
            Some(plan_day) if plan_day.kind == DayKind::Training => plan_day
                .exercises
                .iter()
                .map(WorkoutExercise::from)
                .collect(),
            _ => vec![],
        };
        Self {
            id,
            plan_id: Some(plan.id),
            day,
            start_time,
            end_time: None,
            notes: String::new(),
            exercises,
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end_time| end_time - self.start_time)
    }

    pub fn valid_sets(&self) -> impl Iterator<Item = &SetRecord> {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter(|s| s.is_valid())
    }

    /// Sum of weight × reps over all completed sets.
    #[must_use]
    pub fn total_volume(&self) -> f32 {
        self.valid_sets().map(SetRecord::volume).sum()
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.valid_sets().count()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub name: Name,
    pub target_sets: u32,
    pub rep_range: TargetRange,
    pub rir_range: TargetRange,
    pub sets: Vec<SetRecord>,
}

impl WorkoutExercise {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        !self.sets.is_empty() && self.sets.iter().all(|s| s.completed)
    }

    /// Toggle the completion of a set.
    ///
    /// Completing the last set while fewer sets than targeted exist appends
    /// the next set, prefilled with the suggested weight.
    pub fn toggle_set(&mut self, index: usize, increment: f32) {
        let Some(set) = self.sets.get_mut(index) else {
            return;
        };

        set.completed = !set.completed;

        let set = *set;
        let is_last = index + 1 == self.sets.len();

        if set.is_valid() && is_last && self.sets.len() < self.target_sets as usize {
            let weight = suggest_next_set_weight(&*self, &set, increment);
            self.sets.push(SetRecord {
                weight: Weight::new(weight).unwrap_or(set.weight),
                ..SetRecord::default()
            });
        }
    }
}

impl Prescription for WorkoutExercise {
    fn rep_range(&self) -> TargetRange {
        self.rep_range
    }

    fn rir_range(&self) -> TargetRange {
        self.rir_range
    }
}

impl From<&PlanExercise> for WorkoutExercise {
    fn from(value: &PlanExercise) -> Self {
        Self {
            name: value.name.clone(),
            target_sets: value.target_sets,
            rep_range: value.rep_range,
            rir_range: value.rir_range,
            sets: vec![],
        }
    }
}
