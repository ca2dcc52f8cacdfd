//! JSON documents as stored by the application.
//!
//! Muscles, ranges, weekdays and set inputs are stored as free text. They are
//! validated when converting a record into its domain counterpart.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{self, Property};

/// Direct muscle used by exercises created before the deltoids were split up.
const LEGACY_SHOULDERS: &str = "Shoulders";

const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const DEFAULT_REST_SECONDS: u32 = 90;

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Muscle(#[from] domain::MuscleError),
    #[error(transparent)]
    Exercise(#[from] domain::ExerciseError),
    #[error(transparent)]
    Range(#[from] domain::RangeError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error(transparent)]
    RepsInReserve(#[from] domain::RIRError),
    #[error("Unknown day \"{0}\"")]
    Day(String),
    #[error("Unknown day type \"{0}\"")]
    DayKind(String),
    #[error("Unknown training goal \"{0}\"")]
    Goal(String),
}

/// Exercises grouped by the lowercase name of their muscle group.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct ExerciseLibrary(pub BTreeMap<String, Vec<Exercise>>);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub direct_muscles: Vec<String>,
    #[serde(default)]
    pub indirect_muscles: Vec<String>,
}

impl From<&[domain::Exercise]> for ExerciseLibrary {
    fn from(value: &[domain::Exercise]) -> Self {
        let mut library = BTreeMap::<String, Vec<Exercise>>::new();
        for exercise in value {
            library
                .entry(category_key(exercise.category))
                .or_default()
                .push(Exercise {
                    name: exercise.name.to_string(),
                    direct_muscles: muscle_names(&exercise.direct_muscles),
                    indirect_muscles: muscle_names(&exercise.indirect_muscles),
                });
        }
        Self(library)
    }
}

impl TryFrom<ExerciseLibrary> for Vec<domain::Exercise> {
    type Error = RecordError;

    fn try_from(value: ExerciseLibrary) -> Result<Self, Self::Error> {
        let mut library = value.0;
        let mut exercises = vec![];

        for group in domain::MuscleGroup::iter() {
            for exercise in library.remove(&category_key(*group)).unwrap_or_default() {
                exercises.push(domain::Exercise::new(
                    domain::Name::new(&exercise.name)?,
                    *group,
                    muscles(&exercise.direct_muscles)?,
                    muscles(&exercise.indirect_muscles)?,
                )?);
            }
        }

        if let Some(category) = library.into_keys().next() {
            return Err(domain::MuscleError::Unknown(category).into());
        }

        Ok(exercises)
    }
}

/// Plans by their ID.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct Plans(pub BTreeMap<String, Plan>);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub days: BTreeMap<String, PlanDay>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub exercises: Vec<PlanExercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercise {
    pub name: String,
    #[serde(default)]
    pub direct_muscles: Vec<String>,
    #[serde(default)]
    pub indirect_muscles: Vec<String>,
    pub sets: u32,
    pub rep_range: String,
    pub rir_range: String,
    #[serde(default = "default_rest")]
    pub rest: u32,
}

fn default_rest() -> u32 {
    DEFAULT_REST_SECONDS
}

impl From<&[domain::Plan]> for Plans {
    fn from(value: &[domain::Plan]) -> Self {
        Self(
            value
                .iter()
                .map(|plan| (plan.id.to_string(), Plan::from(plan)))
                .collect(),
        )
    }
}

impl TryFrom<Plans> for Vec<domain::Plan> {
    type Error = RecordError;

    fn try_from(value: Plans) -> Result<Self, Self::Error> {
        value.0.into_values().map(domain::Plan::try_from).collect()
    }
}

impl From<&domain::Plan> for Plan {
    fn from(value: &domain::Plan) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            goal: Some(value.goal.to_string()),
            days: value
                .days
                .iter()
                .map(|(day, plan_day)| {
                    (
                        day_name(*day).to_string(),
                        PlanDay {
                            kind: day_kind_name(plan_day.kind).to_string(),
                            exercises: plan_day.exercises.iter().map(PlanExercise::from).collect(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl TryFrom<Plan> for domain::Plan {
    type Error = RecordError;

    fn try_from(value: Plan) -> Result<Self, Self::Error> {
        let goal = match value.goal {
            Some(goal) => goal
                .parse::<domain::TrainingGoal>()
                .map_err(|_| RecordError::Goal(goal))?,
            None => domain::TrainingGoal::default(),
        };
        let mut plan =
            domain::Plan::new(plan_id(&value.id), domain::Name::new(&value.name)?, goal);

        for (name, day) in value.days {
            plan.days.insert(
                day_from_name(&name)?,
                domain::PlanDay {
                    kind: day_kind_from_name(&day.kind)?,
                    exercises: day
                        .exercises
                        .into_iter()
                        .map(domain::PlanExercise::try_from)
                        .collect::<Result<_, _>>()?,
                },
            );
        }

        Ok(plan)
    }
}

impl From<&domain::PlanExercise> for PlanExercise {
    fn from(value: &domain::PlanExercise) -> Self {
        Self {
            name: value.name.to_string(),
            direct_muscles: muscle_names(&value.direct_muscles),
            indirect_muscles: muscle_names(&value.indirect_muscles),
            sets: value.target_sets,
            rep_range: value.rep_range.to_string(),
            rir_range: value.rir_range.to_string(),
            rest: value.rest_seconds,
        }
    }
}

impl TryFrom<PlanExercise> for domain::PlanExercise {
    type Error = RecordError;

    fn try_from(value: PlanExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            direct_muscles: muscles(&value.direct_muscles)?,
            indirect_muscles: muscles(&value.indirect_muscles)?,
            target_sets: value.sets,
            rep_range: domain::TargetRange::try_from(value.rep_range.as_str())?,
            rir_range: domain::TargetRange::try_from(value.rir_range.as_str())?,
            rest_seconds: value.rest,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct Workouts(pub Vec<Workout>);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(default)]
    pub id: Uuid,
    pub day: String,
    #[serde(default)]
    pub plan: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    #[serde(default)]
    pub total_volume: f32,
    #[serde(default)]
    pub total_sets: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub name: String,
    #[serde(default)]
    pub target_sets: u32,
    pub rep_range: String,
    pub rir_range: String,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct SetRecord {
    #[serde(default)]
    pub weight: Input,
    #[serde(default)]
    pub reps: Input,
    #[serde(default)]
    pub rir: Input,
    #[serde(default)]
    pub completed: bool,
}

/// Value of an input field. Fields which have not been filled in yet are
/// stored as empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Input {
    Integer(u32),
    Decimal(f32),
    Text(String),
}

impl Default for Input {
    fn default() -> Self {
        Input::Text(String::new())
    }
}

impl Input {
    fn is_blank(&self) -> bool {
        matches!(self, Input::Text(text) if text.trim().is_empty())
    }

    #[allow(clippy::cast_precision_loss)]
    fn weight(&self) -> Result<domain::Weight, domain::WeightError> {
        match self {
            _ if self.is_blank() => Ok(domain::Weight::default()),
            Input::Integer(value) => domain::Weight::new(*value as f32),
            Input::Decimal(value) => domain::Weight::new(*value),
            Input::Text(text) => domain::Weight::try_from(text.as_str()),
        }
    }

    fn reps(&self) -> Result<domain::Reps, domain::RepsError> {
        match self {
            _ if self.is_blank() => Ok(domain::Reps::default()),
            Input::Integer(value) => domain::Reps::new(*value),
            Input::Decimal(value) => {
                domain::Reps::new(whole_number(*value).ok_or(domain::RepsError::ParseError)?)
            }
            Input::Text(text) => domain::Reps::try_from(text.as_str()),
        }
    }

    fn rir(&self) -> Result<domain::RIR, domain::RIRError> {
        match self {
            Input::Integer(value) => domain::RIR::new(*value),
            Input::Decimal(value) => {
                domain::RIR::new(whole_number(*value).ok_or(domain::RIRError::ParseError)?)
            }
            Input::Text(text) => domain::RIR::try_from(text.as_str()),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number(value: f32) -> Option<u32> {
    if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f32 {
        Some(value as u32)
    } else {
        None
    }
}

impl From<&[domain::Workout]> for Workouts {
    fn from(value: &[domain::Workout]) -> Self {
        Self(value.iter().map(Workout::from).collect())
    }
}

impl TryFrom<Workouts> for Vec<domain::Workout> {
    type Error = RecordError;

    fn try_from(value: Workouts) -> Result<Self, Self::Error> {
        value.0.into_iter().map(domain::Workout::try_from).collect()
    }
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            day: day_name(value.day).to_string(),
            plan: value.plan_id.map(|id| id.to_string()),
            start_time: value.start_time.and_utc(),
            end_time: value.end_time.map(|end_time| end_time.and_utc()),
            notes: value.notes.clone(),
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
            total_volume: value.total_volume(),
            total_sets: value.total_sets(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = RecordError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            plan_id: value
                .plan
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(plan_id),
            day: day_from_name(&value.day)?,
            start_time: value.start_time.naive_utc(),
            end_time: value.end_time.map(|end_time| end_time.naive_utc()),
            notes: value.notes,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            name: value.name.to_string(),
            target_sets: value.target_sets,
            rep_range: value.rep_range.to_string(),
            rir_range: value.rir_range.to_string(),
            sets: value.sets.iter().map(SetRecord::from).collect(),
            completed: value.is_completed(),
        }
    }
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = RecordError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            target_sets: value.target_sets,
            rep_range: domain::TargetRange::try_from(value.rep_range.as_str())?,
            rir_range: domain::TargetRange::try_from(value.rir_range.as_str())?,
            sets: value
                .sets
                .iter()
                .map(domain::SetRecord::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<&domain::SetRecord> for SetRecord {
    fn from(value: &domain::SetRecord) -> Self {
        Self {
            weight: Input::Decimal(f32::from(value.weight)),
            reps: Input::Integer(u32::from(value.reps)),
            rir: Input::Integer(u32::from(value.rir)),
            completed: value.completed,
        }
    }
}

impl TryFrom<&SetRecord> for domain::SetRecord {
    type Error = RecordError;

    fn try_from(value: &SetRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            weight: value.weight.weight()?,
            reps: value.reps.reps()?,
            rir: value.rir.rir()?,
            completed: value.completed,
        })
    }
}

/// Performance histories by exercise name.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct PerformanceHistory(pub BTreeMap<String, ExerciseHistory>);

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ExerciseHistory {
    #[serde(rename = "estimated1RM", default)]
    pub estimated_one_rep_max: f32,
    #[serde(default)]
    pub sets: Vec<SetEvaluation>,
    #[serde(default)]
    pub progression: Vec<ProgressionPoint>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetEvaluation {
    pub date: DateTime<Utc>,
    pub weight: f32,
    pub reps: u32,
    #[serde(default)]
    pub rir: u32,
    #[serde(rename = "estimated1RM")]
    pub estimated_one_rep_max: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressionPoint {
    pub date: DateTime<Utc>,
    #[serde(rename = "estimated1RM")]
    pub estimated_one_rep_max: f32,
}

impl From<&BTreeMap<domain::Name, domain::PerformanceHistory>> for PerformanceHistory {
    fn from(value: &BTreeMap<domain::Name, domain::PerformanceHistory>) -> Self {
        Self(
            value
                .iter()
                .map(|(name, history)| {
                    (
                        name.to_string(),
                        ExerciseHistory {
                            estimated_one_rep_max: history.estimated_one_rep_max,
                            sets: history
                                .sets
                                .iter()
                                .map(|set| SetEvaluation {
                                    date: set.date.and_utc(),
                                    weight: set.weight,
                                    reps: set.reps,
                                    rir: set.rir,
                                    estimated_one_rep_max: set.estimated_one_rep_max,
                                })
                                .collect(),
                            progression: history
                                .progression
                                .iter()
                                .map(|point| ProgressionPoint {
                                    date: point.date.and_utc(),
                                    estimated_one_rep_max: point.estimated_one_rep_max,
                                })
                                .collect(),
                        },
                    )
                })
                .collect(),
        )
    }
}

impl TryFrom<PerformanceHistory> for BTreeMap<domain::Name, domain::PerformanceHistory> {
    type Error = RecordError;

    fn try_from(value: PerformanceHistory) -> Result<Self, Self::Error> {
        value
            .0
            .into_iter()
            .map(|(name, history)| {
                Ok((
                    domain::Name::new(&name)?,
                    domain::PerformanceHistory {
                        estimated_one_rep_max: history.estimated_one_rep_max.max(0.0),
                        sets: history
                            .sets
                            .into_iter()
                            .map(|set| domain::SetEvaluation {
                                date: set.date.naive_utc(),
                                weight: set.weight,
                                reps: set.reps,
                                rir: set.rir,
                                estimated_one_rep_max: set.estimated_one_rep_max,
                            })
                            .collect(),
                        progression: history
                            .progression
                            .into_iter()
                            .map(|point| domain::ProgressionPoint {
                                date: point.date.naive_utc(),
                                estimated_one_rep_max: point.estimated_one_rep_max,
                            })
                            .collect(),
                    },
                ))
            })
            .collect()
    }
}

fn category_key(group: domain::MuscleGroup) -> String {
    group.name().to_lowercase()
}

fn muscles(names: &[String]) -> Result<BTreeSet<domain::Muscle>, domain::MuscleError> {
    let mut muscles = BTreeSet::new();
    for name in names {
        if name.trim().eq_ignore_ascii_case(LEGACY_SHOULDERS) {
            muscles.extend([domain::Muscle::FrontDelts, domain::Muscle::SideDelts]);
        } else {
            muscles.insert(domain::Muscle::try_from(name.as_str())?);
        }
    }
    Ok(muscles)
}

/// Plans created before plans had UUIDs are identified by `plan_<timestamp>`.
/// Such IDs map to a name-based UUID, so workouts still refer to their plan.
fn plan_id(id: &str) -> domain::PlanID {
    Uuid::parse_str(id)
        .unwrap_or_else(|_| Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes()))
        .into()
}

fn muscle_names(muscles: &BTreeSet<domain::Muscle>) -> Vec<String> {
    muscles.iter().map(|m| m.name().to_string()).collect()
}

fn day_name(day: domain::Day) -> &'static str {
    DAY_NAMES[day.weekday().num_days_from_monday() as usize]
}

fn day_from_name(name: &str) -> Result<domain::Day, RecordError> {
    name.parse::<Weekday>()
        .map(domain::Day::from)
        .map_err(|_| RecordError::Day(name.to_string()))
}

fn day_kind_name(kind: domain::DayKind) -> &'static str {
    match kind {
        domain::DayKind::Training => "training",
        domain::DayKind::Rest => "rest",
        domain::DayKind::ActiveRecovery => "active-recovery",
    }
}

fn day_kind_from_name(name: &str) -> Result<domain::DayKind, RecordError> {
    match name {
        "training" => Ok(domain::DayKind::Training),
        "rest" => Ok(domain::DayKind::Rest),
        "active-recovery" => Ok(domain::DayKind::ActiveRecovery),
        _ => Err(RecordError::DayKind(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{EXERCISES, PLAN, WORKOUT};

    use super::*;

    #[test]
    fn test_exercise_library_from_legacy_document() {
        let library: ExerciseLibrary = serde_json::from_value(json!({
            "shoulders": [
                { "name": "Overhead Press", "directMuscles": ["Shoulders"], "indirectMuscles": ["Triceps"] },
                { "name": "Lateral Raises", "directMuscles": ["Side Delts"], "indirectMuscles": [] }
            ],
            "chest": [
                { "name": "Bench Press", "directMuscles": ["Chest", "Front Delts"], "indirectMuscles": ["Triceps"] }
            ]
        }))
        .unwrap();

        let exercises = Vec::<domain::Exercise>::try_from(library).unwrap();

        assert_eq!(
            exercises
                .iter()
                .map(|e| (e.name.as_str(), e.category))
                .collect::<Vec<_>>(),
            vec![
                ("Bench Press", domain::MuscleGroup::Chest),
                ("Overhead Press", domain::MuscleGroup::Shoulders),
                ("Lateral Raises", domain::MuscleGroup::Shoulders),
            ]
        );
        assert_eq!(
            exercises[1].direct_muscles,
            BTreeSet::from([domain::Muscle::FrontDelts, domain::Muscle::SideDelts])
        );
    }

    #[rstest]
    #[case::unknown_category(json!({ "cardio": [] }), "Unknown muscle \"cardio\"")]
    #[case::unknown_muscle(
        json!({ "arms": [{ "name": "Curls", "directMuscles": ["Bicep"] }] }),
        "Unknown muscle \"Bicep\""
    )]
    #[case::no_direct_muscle(
        json!({ "arms": [{ "name": "Curls", "directMuscles": [] }] }),
        "Exercise must train at least one muscle directly"
    )]
    fn test_exercise_library_invalid(#[case] value: serde_json::Value, #[case] message: &str) {
        let library: ExerciseLibrary = serde_json::from_value(value).unwrap();
        assert_eq!(
            Vec::<domain::Exercise>::try_from(library)
                .unwrap_err()
                .to_string(),
            message
        );
    }

    #[test]
    fn test_exercise_library_roundtrip_keeps_order() {
        let library = ExerciseLibrary::from(&EXERCISES[..]);
        assert_eq!(
            library.0.keys().collect::<Vec<_>>(),
            vec!["chest", "legs"]
        );
        assert_eq!(Vec::<domain::Exercise>::try_from(library).unwrap(), *EXERCISES);
    }

    #[test]
    fn test_plan_from_document() {
        let plan: Plan = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Upper Lower",
            "description": "",
            "days": {
                "monday": {
                    "type": "training",
                    "customName": "Upper",
                    "exercises": [{
                        "name": "Bench Press",
                        "category": "chest",
                        "directMuscles": ["Chest"],
                        "indirectMuscles": ["Triceps", "Front Delts"],
                        "sets": 4,
                        "repRange": "6-10",
                        "rirRange": "1-2",
                        "notes": ""
                    }]
                },
                "tuesday": { "type": "rest", "customName": "", "exercises": [] }
            },
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();

        let plan = domain::Plan::try_from(plan).unwrap();

        assert_eq!(plan.goal, domain::TrainingGoal::Hypertrophy);
        assert_eq!(plan.days.len(), 7);
        let (day, monday) = plan.training_days().next().unwrap();
        assert_eq!(day.weekday(), Weekday::Mon);
        assert_eq!(monday.exercises[0].rep_range, domain::TargetRange { min: 6, max: 10 });
        assert_eq!(monday.exercises[0].rest_seconds, DEFAULT_REST_SECONDS);
    }

    #[rstest]
    #[case::malformed_range("8 to 12", "Range must have the form min-max (\"8 to 12\")")]
    #[case::inverted_range("12-8", "Range minimum must not exceed maximum (12 > 8)")]
    fn test_plan_exercise_invalid_range(#[case] rep_range: &str, #[case] message: &str) {
        let exercise = PlanExercise {
            name: "Squats".to_string(),
            direct_muscles: vec!["Quads".to_string()],
            indirect_muscles: vec![],
            sets: 3,
            rep_range: rep_range.to_string(),
            rir_range: "1-3".to_string(),
            rest: 120,
        };
        assert_eq!(
            domain::PlanExercise::try_from(exercise)
                .unwrap_err()
                .to_string(),
            message
        );
    }

    #[test]
    fn test_plan_roundtrip() {
        let record = Plan::from(&*PLAN);
        assert_eq!(record.days["monday"].kind, "training");
        assert_eq!(record.days["sunday"].kind, "rest");
        assert_eq!(record.goal, Some("strength".to_string()));
        assert_eq!(domain::Plan::try_from(record).unwrap(), *PLAN);
    }

    #[rstest]
    #[case::unknown_day("funday", "Unknown day \"funday\"")]
    #[case::unknown_goal("monday", "Unknown training goal \"bulk\"")]
    fn test_plan_invalid(#[case] day: &str, #[case] message: &str) {
        let mut record = Plan::from(&*PLAN);
        let monday = record.days.remove("monday").unwrap();
        record.days.insert(day.to_string(), monday);
        if day == "monday" {
            record.goal = Some("bulk".to_string());
        }
        assert_eq!(
            domain::Plan::try_from(record).unwrap_err().to_string(),
            message
        );
    }

    #[rstest]
    #[case::uuid("00000000-0000-0000-0000-000000000001", domain::PlanID::from(1))]
    #[case::legacy(
        "plan_1718000000000",
        domain::PlanID::from(Uuid::new_v5(&Uuid::NAMESPACE_OID, b"plan_1718000000000"))
    )]
    fn test_plan_id(#[case] id: &str, #[case] expected: domain::PlanID) {
        let mut record = Plan::from(&*PLAN);
        record.id = id.to_string();

        assert_eq!(domain::Plan::try_from(record).unwrap().id, expected);
    }

    #[rstest]
    #[case::none(None, None)]
    #[case::blank(Some(""), None)]
    #[case::uuid(
        Some("00000000-0000-0000-0000-000000000001"),
        Some(domain::PlanID::from(1))
    )]
    #[case::legacy(Some("plan_1718000000000"), Some(plan_id("plan_1718000000000")))]
    fn test_workout_plan_reference(
        #[case] plan: Option<&str>,
        #[case] expected: Option<domain::PlanID>,
    ) {
        let mut record = Workout::from(&*WORKOUT);
        record.plan = plan.map(str::to_string);

        assert_eq!(domain::Workout::try_from(record).unwrap().plan_id, expected);
    }

    #[test]
    fn test_workout_from_document() {
        let workout: Workout = serde_json::from_value(json!({
            "day": "wednesday",
            "plan": null,
            "exercises": [{
                "name": "Squats",
                "targetSets": 3,
                "repRange": "8-12",
                "rirRange": "1-3",
                "rest": 120,
                "sets": [
                    { "weight": "100", "reps": "10", "rir": "2", "completed": true },
                    { "weight": 102.5, "reps": 8, "rir": "", "completed": true },
                    { "weight": "102,5", "reps": "", "rir": "", "completed": false }
                ],
                "completed": false
            }],
            "startTime": "2024-06-12T17:00:00.000Z",
            "endTime": "2024-06-12T18:15:00.000Z",
            "totalVolume": 1820,
            "notes": "felt strong"
        }))
        .unwrap();

        let workout = domain::Workout::try_from(workout).unwrap();

        assert!(workout.id.is_nil());
        assert_eq!(workout.day.weekday(), Weekday::Wed);
        assert_eq!(workout.duration(), Some(chrono::Duration::minutes(75)));
        assert_eq!(workout.total_sets(), 2);
        assert_eq!(workout.total_volume(), 1820.0);
        assert_eq!(workout.exercises[0].sets[2].weight, domain::Weight::new(102.5).unwrap());
        assert_eq!(workout.exercises[0].sets[2].reps, domain::Reps::default());
        assert_eq!(workout.notes, "felt strong");
    }

    #[rstest]
    #[case::weight(json!({ "weight": "heavy", "reps": 5 }), "Weight must be a decimal")]
    #[case::reps(json!({ "weight": 100, "reps": 5.5 }), "Reps must be an integer")]
    #[case::rir(json!({ "weight": 100, "reps": 5, "rir": 25 }), "RIR must be in the range 0 to 20")]
    fn test_set_record_invalid(#[case] value: serde_json::Value, #[case] message: &str) {
        let set: SetRecord = serde_json::from_value(value).unwrap();
        assert_eq!(
            domain::SetRecord::try_from(&set).unwrap_err().to_string(),
            message
        );
    }

    #[test]
    fn test_workout_roundtrip() {
        let record = Workout::from(&*WORKOUT);
        assert_eq!(record.total_volume, WORKOUT.total_volume());
        assert_eq!(record.total_sets, 2);
        assert!(!record.exercises[0].completed);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["day"], "monday");
        assert_eq!(json["startTime"], "2024-06-10T17:00:00Z");
        assert_eq!(json["exercises"][0]["sets"][0]["reps"], 10);

        let record: Workout = serde_json::from_value(json).unwrap();
        assert_eq!(domain::Workout::try_from(record).unwrap(), *WORKOUT);
    }

    #[test]
    fn test_performance_history_from_document() {
        let history: PerformanceHistory = serde_json::from_value(json!({
            "Squats": {
                "estimated1RM": 133.33,
                "sets": [{
                    "date": "2024-06-12T17:00:00.000Z",
                    "weight": 100,
                    "reps": 10,
                    "rir": 0,
                    "estimated1RM": 133.33
                }],
                "progression": [{ "date": "2024-06-12T17:00:00.000Z", "estimated1RM": 133.33 }]
            }
        }))
        .unwrap();

        let history = BTreeMap::<domain::Name, domain::PerformanceHistory>::try_from(history).unwrap();

        let squats = &history[&domain::Name::new("Squats").unwrap()];
        assert_eq!(squats.estimated_one_rep_max, 133.33);
        assert_eq!(squats.sets[0].reps, 10);
        assert_eq!(
            squats.progression[0].date,
            chrono::NaiveDate::from_ymd_opt(2024, 6, 12)
                .unwrap()
                .and_hms_opt(17, 0, 0)
                .unwrap()
        );
        assert_eq!(
            PerformanceHistory::from(&history).0["Squats"].progression.len(),
            1
        );
    }
}
