use std::{collections::BTreeSet, slice::Iter};

use crate::{Name, ReadError, ValidationError, WriteError};

pub trait ExerciseService {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn create_exercise(&self, exercise: Exercise) -> Result<Exercise, WriteError>;
    fn delete_exercise(&self, name: &Name) -> Result<Name, WriteError>;

    fn validate_exercise_name(&self, name: &str) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_exercises() {
                Ok(exercises) => {
                    if exercises.iter().all(|e| e.name != name) {
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

pub trait ExerciseRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn write_exercises(&self, exercises: &[Exercise]) -> Result<(), WriteError>;
}

/// Exercise of the user's exercise library.
///
/// A muscle is either trained directly (full volume credit) or indirectly
/// (half volume credit), never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: Name,
    pub category: MuscleGroup,
    pub direct_muscles: BTreeSet<Muscle>,
    pub indirect_muscles: BTreeSet<Muscle>,
}

impl Exercise {
    pub fn new(
        name: Name,
        category: MuscleGroup,
        direct_muscles: BTreeSet<Muscle>,
        indirect_muscles: BTreeSet<Muscle>,
    ) -> Result<Self, ExerciseError> {
        if direct_muscles.is_empty() {
            return Err(ExerciseError::NoDirectMuscle);
        }

        if let Some(muscle) = direct_muscles.intersection(&indirect_muscles).next() {
            return Err(ExerciseError::OverlappingMuscle(*muscle));
        }

        Ok(Self {
            name,
            category,
            direct_muscles,
            indirect_muscles,
        })
    }

    #[must_use]
    pub fn trains(&self, muscle: Muscle) -> bool {
        self.direct_muscles.contains(&muscle) || self.indirect_muscles.contains(&muscle)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error("Exercise must train at least one muscle directly")]
    NoDirectMuscle,
    #[error("{} must not be trained both directly and indirectly", .0.name())]
    OverlappingMuscle(Muscle),
}

/// The exercise library a new user starts with.
#[must_use]
pub fn default_exercises() -> Vec<Exercise> {
    use Muscle::{
        Abs, Biceps, Chest, FrontDelts, Glutes, Hamstrings, Lats, LowerBack, Obliques, Quads,
        SideDelts, Triceps,
    };

    let library: [(&str, MuscleGroup, &[Muscle], &[Muscle]); 12] = [
        ("Bench Press", MuscleGroup::Chest, &[Chest, FrontDelts], &[Triceps]),
        ("Incline Dumbbell Press", MuscleGroup::Chest, &[Chest, FrontDelts], &[Triceps]),
        ("Pull Ups", MuscleGroup::Back, &[Lats], &[Biceps]),
        ("Deadlifts", MuscleGroup::Back, &[Lats, LowerBack], &[Hamstrings, Glutes]),
        ("Overhead Press", MuscleGroup::Shoulders, &[FrontDelts, SideDelts], &[Triceps]),
        ("Lateral Raises", MuscleGroup::Shoulders, &[SideDelts], &[]),
        ("Bicep Curls", MuscleGroup::Arms, &[Biceps], &[]),
        ("Tricep Dips", MuscleGroup::Arms, &[Triceps], &[]),
        ("Squats", MuscleGroup::Legs, &[Quads, Hamstrings, Glutes], &[]),
        ("Leg Press", MuscleGroup::Legs, &[Quads, Hamstrings], &[Glutes]),
        ("Planks", MuscleGroup::Core, &[Abs], &[LowerBack]),
        ("Russian Twists", MuscleGroup::Core, &[Obliques], &[]),
    ];

    library
        .into_iter()
        .filter_map(|(name, category, direct, indirect)| {
            Exercise::new(
                Name::new(name).ok()?,
                category,
                direct.iter().copied().collect(),
                indirect.iter().copied().collect(),
            )
            .ok()
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    Chest,
    FrontDelts,
    SideDelts,
    RearDelts,
    Lats,
    Traps,
    Rhomboids,
    LowerBack,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Obliques,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    HipFlexors,
    Adductors,
    SerratusAnterior,
    Brachialis,
    CoreStabilizers,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 22] = [
            Muscle::Chest,
            Muscle::FrontDelts,
            Muscle::SideDelts,
            Muscle::RearDelts,
            Muscle::Lats,
            Muscle::Traps,
            Muscle::Rhomboids,
            Muscle::LowerBack,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Forearms,
            Muscle::Abs,
            Muscle::Obliques,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Glutes,
            Muscle::Calves,
            Muscle::HipFlexors,
            Muscle::Adductors,
            Muscle::SerratusAnterior,
            Muscle::Brachialis,
            Muscle::CoreStabilizers,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::FrontDelts => "Front Delts",
            Muscle::SideDelts => "Side Delts",
            Muscle::RearDelts => "Rear Delts",
            Muscle::Lats => "Lats",
            Muscle::Traps => "Traps",
            Muscle::Rhomboids => "Rhomboids",
            Muscle::LowerBack => "Lower Back",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Forearms",
            Muscle::Abs => "Abs",
            Muscle::Obliques => "Obliques",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Glutes => "Glutes",
            Muscle::Calves => "Calves",
            Muscle::HipFlexors => "Hip Flexors",
            Muscle::Adductors => "Adductors",
            Muscle::SerratusAnterior => "Serratus Anterior",
            Muscle::Brachialis => "Brachialis",
            Muscle::CoreStabilizers => "Core Stabilizers",
        }
    }
}

impl TryFrom<&str> for Muscle {
    type Error = MuscleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Muscle::iter()
            .find(|m| m.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| MuscleError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleError {
    #[error("Unknown muscle \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
}

impl MuscleGroup {
    /// Muscles belonging to the group. Front delts and lower back belong to
    /// two groups each.
    #[must_use]
    pub fn muscles(self) -> &'static [Muscle] {
        match self {
            MuscleGroup::Chest => &[Muscle::Chest, Muscle::FrontDelts, Muscle::SerratusAnterior],
            MuscleGroup::Back => &[
                Muscle::Lats,
                Muscle::Traps,
                Muscle::Rhomboids,
                Muscle::LowerBack,
            ],
            MuscleGroup::Shoulders => &[Muscle::FrontDelts, Muscle::SideDelts, Muscle::RearDelts],
            MuscleGroup::Arms => &[
                Muscle::Biceps,
                Muscle::Triceps,
                Muscle::Forearms,
                Muscle::Brachialis,
            ],
            MuscleGroup::Legs => &[
                Muscle::Quads,
                Muscle::Hamstrings,
                Muscle::Glutes,
                Muscle::Calves,
                Muscle::HipFlexors,
                Muscle::Adductors,
            ],
            MuscleGroup::Core => &[
                Muscle::Abs,
                Muscle::Obliques,
                Muscle::LowerBack,
                Muscle::CoreStabilizers,
            ],
        }
    }
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static GROUPS: [MuscleGroup; 6] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
        ];
        GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
        }
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|g| g.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| MuscleError::Unknown(value.to_string()))
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Front Delts", Ok(Muscle::FrontDelts))]
    #[case("lower back", Ok(Muscle::LowerBack))]
    #[case(" Calves ", Ok(Muscle::Calves))]
    #[case("Shoulders", Err(MuscleError::Unknown("Shoulders".to_string())))]
    fn test_muscle_try_from_str(#[case] input: &str, #[case] expected: Result<Muscle, MuscleError>) {
        assert_eq!(Muscle::try_from(input), expected);
    }

    #[test]
    fn test_muscle_names_roundtrip() {
        for muscle in Muscle::iter() {
            assert_eq!(Muscle::try_from(muscle.name()), Ok(*muscle));
        }
    }

    #[test]
    fn test_muscle_groups_cover_all_muscles() {
        for muscle in Muscle::iter() {
            assert!(
                MuscleGroup::iter().any(|g| g.muscles().contains(muscle)),
                "{} is not part of any muscle group",
                muscle.name()
            );
        }
    }

    #[rstest]
    #[case("core", Ok(MuscleGroup::Core))]
    #[case("Glutes", Err(MuscleError::Unknown("Glutes".to_string())))]
    fn test_muscle_group_try_from_str(
        #[case] input: &str,
        #[case] expected: Result<MuscleGroup, MuscleError>,
    ) {
        assert_eq!(MuscleGroup::try_from(input), expected);
    }

    #[test]
    fn test_exercise_new() {
        assert_eq!(
            Exercise::new(
                Name::new("Rows").unwrap(),
                MuscleGroup::Back,
                BTreeSet::new(),
                BTreeSet::from([Muscle::Biceps]),
            ),
            Err(ExerciseError::NoDirectMuscle)
        );
        assert_eq!(
            Exercise::new(
                Name::new("Rows").unwrap(),
                MuscleGroup::Back,
                BTreeSet::from([Muscle::Lats, Muscle::Biceps]),
                BTreeSet::from([Muscle::Biceps]),
            ),
            Err(ExerciseError::OverlappingMuscle(Muscle::Biceps))
        );
    }

    #[test]
    fn test_exercise_trains() {
        let exercise = Exercise::new(
            Name::new("Rows").unwrap(),
            MuscleGroup::Back,
            BTreeSet::from([Muscle::Lats]),
            BTreeSet::from([Muscle::Biceps]),
        )
        .unwrap();
        assert!(exercise.trains(Muscle::Lats));
        assert!(exercise.trains(Muscle::Biceps));
        assert!(!exercise.trains(Muscle::Chest));
    }

    #[test]
    fn test_default_exercises() {
        let exercises = default_exercises();
        assert_eq!(exercises.len(), 12);
        for group in MuscleGroup::iter() {
            assert_eq!(exercises.iter().filter(|e| e.category == *group).count(), 2);
        }
        let overhead_press = exercises
            .iter()
            .find(|e| e.name.as_str() == "Overhead Press")
            .unwrap();
        assert_eq!(
            overhead_press.direct_muscles,
            BTreeSet::from([Muscle::FrontDelts, Muscle::SideDelts])
        );
    }
}
