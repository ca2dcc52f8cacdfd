use std::collections::{BTreeMap, BTreeSet};

use crate::{
    GoalPreset, Muscle, MuscleGroup, Plan, PlanExercise, Property, TrainingGoal,
    WORKING_SET_RIR_THRESHOLD,
};

/// Volume credit of an indirectly trained muscle relative to a direct one.
const INDIRECT_CREDIT: f32 = 0.5;

/// Volume credit of sets taken far from failure.
const NON_WORKING_SET_CREDIT: f32 = 0.5;

/// Distance to the target (in sets) within which the volume of a goal
/// anchored at the minimum effective volume counts as optimal.
const MEV_ANCHORED_TOLERANCE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeStatus {
    /// Below maintenance volume
    TooLow,
    /// Between maintenance and minimum effective volume
    MaintenanceOnly,
    /// Between minimum effective volume and the target
    Growth,
    /// Between the target and the maximum recoverable volume
    OptimalGrowth,
    /// Close to the target of a goal anchored at the minimum effective volume
    Optimal,
    /// Above maximum recoverable volume
    TooHigh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleVolume {
    pub muscle: Muscle,
    pub volume: f32,
    pub target: f32,
    pub status: VolumeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyStatus {
    TooLow,
    Optimal,
    TooHigh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleFrequency {
    pub muscle: Muscle,
    pub frequency: u32,
    pub status: FrequencyStatus,
}

/// Credit per set of an exercise depending on its proximity to failure.
#[must_use]
pub fn set_credit(exercise: &PlanExercise) -> f32 {
    if exercise.rir_range.average() <= WORKING_SET_RIR_THRESHOLD {
        1.0
    } else {
        NON_WORKING_SET_CREDIT
    }
}

/// Credited weekly sets per muscle of all training days of a plan.
///
/// Every muscle is contained in the result, untrained muscles with zero volume.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn muscle_volume(plan: &Plan) -> BTreeMap<Muscle, f32> {
    let mut result: BTreeMap<Muscle, f32> = Muscle::iter().map(|m| (*m, 0.0)).collect();

    for (_, day) in plan.training_days() {
        for exercise in &day.exercises {
            let sets = exercise.target_sets as f32 * set_credit(exercise);
            for muscle in &exercise.direct_muscles {
                *result.entry(*muscle).or_insert(0.0) += sets;
            }
            for muscle in &exercise.indirect_muscles {
                *result.entry(*muscle).or_insert(0.0) += sets * INDIRECT_CREDIT;
            }
        }
    }

    result
}

#[must_use]
pub fn classify_volume(muscle: Muscle, volume: f32, preset: &GoalPreset) -> VolumeStatus {
    let landmarks = muscle.volume_landmarks();
    let target = landmarks.target(preset);

    if preset.is_mev_anchored() && (volume - target).abs() <= MEV_ANCHORED_TOLERANCE {
        return VolumeStatus::Optimal;
    }

    if volume < landmarks.mv {
        VolumeStatus::TooLow
    } else if volume < landmarks.mev {
        VolumeStatus::MaintenanceOnly
    } else if volume < target.min(landmarks.mav) {
        VolumeStatus::Growth
    } else if volume <= landmarks.mrv {
        VolumeStatus::OptimalGrowth
    } else {
        VolumeStatus::TooHigh
    }
}

/// Weekly volume of every muscle compared to the landmarks of the given goal.
///
/// Trained muscles come first. Within both parts, muscles further away from
/// their target come first.
#[must_use]
pub fn analyze_volume(plan: &Plan, goal: TrainingGoal) -> Vec<MuscleVolume> {
    let preset = goal.preset();
    let mut result = muscle_volume(plan)
        .into_iter()
        .map(|(muscle, volume)| MuscleVolume {
            muscle,
            volume,
            target: muscle.volume_landmarks().target(&preset),
            status: classify_volume(muscle, volume, &preset),
        })
        .collect::<Vec<_>>();

    result.sort_by(|a, b| {
        (b.volume > 0.0).cmp(&(a.volume > 0.0)).then_with(|| {
            (b.volume - b.target)
                .abs()
                .total_cmp(&(a.volume - a.target).abs())
        })
    });

    result
}

/// Number of distinct training days per week on which each muscle is trained
/// directly or indirectly.
#[must_use]
pub fn muscle_frequency(plan: &Plan) -> BTreeMap<Muscle, u32> {
    let mut result: BTreeMap<Muscle, u32> = Muscle::iter().map(|m| (*m, 0)).collect();

    for (_, day) in plan.training_days() {
        let trained = day
            .exercises
            .iter()
            .filter(|e| e.target_sets > 0)
            .flat_map(|e| e.direct_muscles.iter().chain(&e.indirect_muscles))
            .collect::<BTreeSet<_>>();
        for muscle in trained {
            *result.entry(*muscle).or_insert(0) += 1;
        }
    }

    result
}

#[must_use]
pub fn classify_frequency(muscle: Muscle, frequency: u32) -> FrequencyStatus {
    let recommendation = muscle.frequency_recommendation();
    if frequency < recommendation.min {
        FrequencyStatus::TooLow
    } else if frequency > recommendation.max {
        FrequencyStatus::TooHigh
    } else {
        FrequencyStatus::Optimal
    }
}

#[must_use]
pub fn analyze_frequency(plan: &Plan) -> Vec<MuscleFrequency> {
    muscle_frequency(plan)
        .into_iter()
        .map(|(muscle, frequency)| MuscleFrequency {
            muscle,
            frequency,
            status: classify_frequency(muscle, frequency),
        })
        .collect()
}

/// Weekly volume per muscle group, rounded to whole sets.
///
/// Muscles belonging to multiple groups count towards each of them.
#[must_use]
pub fn muscle_group_volume(plan: &Plan) -> BTreeMap<MuscleGroup, f32> {
    let volume = muscle_volume(plan);
    MuscleGroup::iter()
        .map(|group| {
            let total: f32 = group
                .muscles()
                .iter()
                .filter_map(|m| volume.get(m))
                .sum();
            (*group, total.round())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{DayKind, Name, PlanDay, TargetRange};

    use super::*;

    fn exercise(
        direct: &[Muscle],
        indirect: &[Muscle],
        target_sets: u32,
        rir_range: (u32, u32),
    ) -> PlanExercise {
        PlanExercise {
            name: Name::new("Exercise").unwrap(),
            direct_muscles: direct.iter().copied().collect(),
            indirect_muscles: indirect.iter().copied().collect(),
            target_sets,
            rep_range: TargetRange::new(8, 12).unwrap(),
            rir_range: TargetRange::new(rir_range.0, rir_range.1).unwrap(),
            rest_seconds: 90,
        }
    }

    fn plan(days: &[(Weekday, DayKind, Vec<PlanExercise>)]) -> Plan {
        let mut plan = Plan::new(1.into(), Name::new("Plan").unwrap(), TrainingGoal::Hypertrophy);
        for (weekday, kind, exercises) in days {
            plan.days.insert(
                (*weekday).into(),
                PlanDay {
                    kind: *kind,
                    exercises: exercises.clone(),
                },
            );
        }
        plan
    }

    #[test]
    fn test_muscle_volume_direct_and_indirect() {
        let volume = muscle_volume(&plan(&[(
            Weekday::Mon,
            DayKind::Training,
            vec![exercise(&[Muscle::Chest], &[Muscle::Triceps], 10, (1, 3))],
        )]));
        assert_eq!(volume[&Muscle::Chest], 10.0);
        assert_eq!(volume[&Muscle::Triceps], 5.0);
        assert_eq!(volume[&Muscle::Quads], 0.0);
        assert_eq!(volume.len(), Muscle::iter().len());
    }

    #[test]
    fn test_muscle_volume_far_from_failure() {
        let volume = muscle_volume(&plan(&[(
            Weekday::Mon,
            DayKind::Training,
            vec![exercise(&[Muscle::Chest], &[Muscle::Triceps], 10, (3, 5))],
        )]));
        assert_eq!(volume[&Muscle::Chest], 5.0);
        assert_eq!(volume[&Muscle::Triceps], 2.5);
    }

    #[test]
    fn test_muscle_volume_ignores_non_training_days() {
        let volume = muscle_volume(&plan(&[
            (
                Weekday::Mon,
                DayKind::Training,
                vec![exercise(&[Muscle::Quads], &[], 4, (1, 2))],
            ),
            (
                Weekday::Tue,
                DayKind::ActiveRecovery,
                vec![exercise(&[Muscle::Quads], &[], 6, (1, 2))],
            ),
            (
                Weekday::Wed,
                DayKind::Rest,
                vec![exercise(&[Muscle::Quads], &[], 8, (1, 2))],
            ),
        ]));
        assert_eq!(volume[&Muscle::Quads], 4.0);
    }

    #[rstest]
    #[case::below_maintenance(Muscle::Chest, 3.0, TrainingGoal::Hypertrophy, VolumeStatus::TooLow)]
    #[case::maintenance(Muscle::Chest, 6.0, TrainingGoal::Hypertrophy, VolumeStatus::MaintenanceOnly)]
    #[case::growth(Muscle::Chest, 12.0, TrainingGoal::Hypertrophy, VolumeStatus::Growth)]
    #[case::optimal_growth(Muscle::Chest, 16.0, TrainingGoal::Hypertrophy, VolumeStatus::OptimalGrowth)]
    #[case::at_mrv(Muscle::Chest, 22.0, TrainingGoal::Hypertrophy, VolumeStatus::OptimalGrowth)]
    #[case::above_mrv(Muscle::Chest, 23.0, TrainingGoal::Hypertrophy, VolumeStatus::TooHigh)]
    #[case::target_below_mav(Muscle::Chest, 10.5, TrainingGoal::Endurance, VolumeStatus::OptimalGrowth)]
    #[case::mev_anchored_near_target(Muscle::Chest, 9.5, TrainingGoal::Strength, VolumeStatus::Optimal)]
    #[case::mev_anchored_far_from_target(Muscle::Chest, 12.0, TrainingGoal::Strength, VolumeStatus::OptimalGrowth)]
    #[case::mev_anchored_below_target(Muscle::Chest, 3.0, TrainingGoal::Strength, VolumeStatus::TooLow)]
    fn test_classify_volume(
        #[case] muscle: Muscle,
        #[case] volume: f32,
        #[case] goal: TrainingGoal,
        #[case] expected: VolumeStatus,
    ) {
        assert_eq!(classify_volume(muscle, volume, &goal.preset()), expected);
    }

    #[test]
    fn test_analyze_volume_order() {
        let result = analyze_volume(
            &plan(&[(
                Weekday::Mon,
                DayKind::Training,
                vec![
                    exercise(&[Muscle::Chest], &[], 15, (1, 3)),
                    exercise(&[Muscle::Biceps], &[], 2, (1, 3)),
                ],
            )]),
            TrainingGoal::Hypertrophy,
        );

        assert_eq!(result.len(), Muscle::iter().len());
        assert_eq!(
            result[..2].iter().map(|m| m.muscle).collect::<Vec<_>>(),
            vec![Muscle::Biceps, Muscle::Chest]
        );
        assert_eq!(result[0].volume, 2.0);
        assert_eq!(result[0].target, 17.0);
        assert_eq!(result[0].status, VolumeStatus::TooLow);
        assert_eq!(result[1].status, VolumeStatus::Growth);
        assert!(result[2..].iter().all(|m| m.volume == 0.0));
        assert_eq!(result[2].muscle, Muscle::SideDelts);
    }

    #[test]
    fn test_muscle_frequency() {
        let bench = exercise(&[Muscle::Chest], &[Muscle::Triceps], 3, (1, 3));
        let frequency = muscle_frequency(&plan(&[
            (Weekday::Mon, DayKind::Training, vec![bench.clone(), bench.clone()]),
            (Weekday::Wed, DayKind::Training, vec![exercise(&[Muscle::Chest], &[Muscle::Triceps], 8, (1, 3))]),
            (Weekday::Fri, DayKind::Training, vec![bench.clone()]),
            (Weekday::Sat, DayKind::Rest, vec![bench]),
        ]));
        assert_eq!(frequency[&Muscle::Chest], 3);
        assert_eq!(frequency[&Muscle::Triceps], 3);
        assert_eq!(frequency[&Muscle::Quads], 0);
    }

    #[rstest]
    #[case(Muscle::Chest, 0, FrequencyStatus::TooLow)]
    #[case(Muscle::Chest, 2, FrequencyStatus::Optimal)]
    #[case(Muscle::Chest, 4, FrequencyStatus::TooHigh)]
    #[case(Muscle::Biceps, 1, FrequencyStatus::TooLow)]
    #[case(Muscle::Biceps, 6, FrequencyStatus::Optimal)]
    fn test_classify_frequency(
        #[case] muscle: Muscle,
        #[case] frequency: u32,
        #[case] expected: FrequencyStatus,
    ) {
        assert_eq!(classify_frequency(muscle, frequency), expected);
    }

    #[test]
    fn test_analyze_frequency() {
        let result = analyze_frequency(&plan(&[(
            Weekday::Mon,
            DayKind::Training,
            vec![exercise(&[Muscle::Quads], &[Muscle::Glutes], 4, (1, 2))],
        )]));
        let quads = result.iter().find(|f| f.muscle == Muscle::Quads).unwrap();
        assert_eq!(
            *quads,
            MuscleFrequency {
                muscle: Muscle::Quads,
                frequency: 1,
                status: FrequencyStatus::Optimal
            }
        );
    }

    #[test]
    fn test_muscle_group_volume() {
        let volume = muscle_group_volume(&plan(&[(
            Weekday::Mon,
            DayKind::Training,
            vec![exercise(
                &[Muscle::Chest, Muscle::FrontDelts],
                &[Muscle::Triceps],
                3,
                (1, 3),
            )],
        )]));
        assert_eq!(volume[&MuscleGroup::Chest], 6.0);
        assert_eq!(volume[&MuscleGroup::Shoulders], 3.0);
        assert_eq!(volume[&MuscleGroup::Arms], 2.0);
        assert_eq!(volume[&MuscleGroup::Legs], 0.0);
    }
}
