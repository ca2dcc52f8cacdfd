use std::collections::{BTreeMap, BTreeSet};

use chrono::Weekday;
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    Muscle, MuscleFrequency, MuscleVolume, Name, ReadError, TargetRange, TrainingGoal,
    ValidationError, WriteError,
};

pub trait PlanService {
    fn get_plans(&self) -> Result<Vec<Plan>, ReadError>;
    fn create_plan(&self, plan: Plan) -> Result<Plan, WriteError>;
    fn replace_plan(&self, plan: Plan) -> Result<Plan, WriteError>;
    fn delete_plan(&self, id: PlanID) -> Result<PlanID, WriteError>;

    /// Weekly volume and training frequency of each muscle, judged by the goal of the plan.
    fn analyze_plan(&self, id: PlanID)
    -> Result<(Vec<MuscleVolume>, Vec<MuscleFrequency>), ReadError>;

    fn validate_plan_name(&self, name: &str, id: PlanID) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_plans() {
                Ok(plans) => {
                    if plans.iter().all(|p| p.id == id || p.name != name) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

pub trait PlanRepository {
    fn read_plans(&self) -> Result<Vec<Plan>, ReadError>;
    fn write_plans(&self, plans: &[Plan]) -> Result<(), WriteError>;
}

/// Weekly training split.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: PlanID,
    pub name: Name,
    pub goal: TrainingGoal,
    pub days: BTreeMap<Day, PlanDay>,
}

impl Plan {
    /// Create a plan where every day of the week is a rest day.
    #[must_use]
    pub fn new(id: PlanID, name: Name, goal: TrainingGoal) -> Self {
        Self {
            id,
            name,
            goal,
            days: Day::iter().map(|d| (d, PlanDay::default())).collect(),
        }
    }

    pub fn training_days(&self) -> impl Iterator<Item = (&Day, &PlanDay)> {
        self.days
            .iter()
            .filter(|(_, day)| day.kind == DayKind::Training)
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.training_days()
            .flat_map(|(_, day)| &day.exercises)
            .map(|e| e.target_sets)
            .sum()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Day of the week, ordered from Monday to Sunday.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Day(u8);

impl Day {
    pub fn iter() -> impl Iterator<Item = Day> {
        (0..7).map(Day)
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        Weekday::try_from(self.0).unwrap_or(Weekday::Mon)
    }
}

impl From<Weekday> for Day {
    fn from(value: Weekday) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        Day(value.num_days_from_monday() as u8)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlanDay {
    pub kind: DayKind,
    pub exercises: Vec<PlanExercise>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Training,
    #[default]
    Rest,
    ActiveRecovery,
}

/// Prescription of an exercise within a day of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanExercise {
    pub name: Name,
    pub direct_muscles: BTreeSet<Muscle>,
    pub indirect_muscles: BTreeSet<Muscle>,
    pub target_sets: u32,
    pub rep_range: TargetRange,
    pub rir_range: TargetRange,
    pub rest_seconds: u32,
}
