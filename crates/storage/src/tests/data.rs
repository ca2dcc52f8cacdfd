use std::collections::BTreeSet;

use chrono::{NaiveDate, Weekday};
use gymapp_domain as domain;

pub static EXERCISES: std::sync::LazyLock<Vec<domain::Exercise>> =
    std::sync::LazyLock::new(|| vec![EXERCISE.clone(), EXERCISE_2.clone()]);

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> = std::sync::LazyLock::new(|| {
    domain::Exercise::new(
        domain::Name::new("Bench Press").unwrap(),
        domain::MuscleGroup::Chest,
        BTreeSet::from([domain::Muscle::Chest, domain::Muscle::FrontDelts]),
        BTreeSet::from([domain::Muscle::Triceps]),
    )
    .unwrap()
});

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> = std::sync::LazyLock::new(|| {
    domain::Exercise::new(
        domain::Name::new("Squats").unwrap(),
        domain::MuscleGroup::Legs,
        BTreeSet::from([
            domain::Muscle::Quads,
            domain::Muscle::Hamstrings,
            domain::Muscle::Glutes,
        ]),
        BTreeSet::new(),
    )
    .unwrap()
});

pub static PLAN_EXERCISE: std::sync::LazyLock<domain::PlanExercise> =
    std::sync::LazyLock::new(|| domain::PlanExercise {
        name: domain::Name::new("Squats").unwrap(),
        direct_muscles: BTreeSet::from([domain::Muscle::Quads, domain::Muscle::Glutes]),
        indirect_muscles: BTreeSet::from([domain::Muscle::LowerBack]),
        target_sets: 3,
        rep_range: domain::TargetRange::new(3, 6).unwrap(),
        rir_range: domain::TargetRange::new(1, 2).unwrap(),
        rest_seconds: 180,
    });

pub static PLAN: std::sync::LazyLock<domain::Plan> = std::sync::LazyLock::new(|| {
    let mut plan = domain::Plan::new(
        1.into(),
        domain::Name::new("Full Body").unwrap(),
        domain::TrainingGoal::Strength,
    );
    for day in [Weekday::Mon, Weekday::Thu] {
        plan.days.insert(
            day.into(),
            domain::PlanDay {
                kind: domain::DayKind::Training,
                exercises: vec![PLAN_EXERCISE.clone()],
            },
        );
    }
    plan.days.insert(
        Weekday::Sat.into(),
        domain::PlanDay {
            kind: domain::DayKind::ActiveRecovery,
            exercises: vec![],
        },
    );
    plan
});

pub static WORKOUT: std::sync::LazyLock<domain::Workout> = std::sync::LazyLock::new(|| {
    let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut workout = domain::Workout::start(
        1.into(),
        &PLAN,
        Weekday::Mon.into(),
        date.and_hms_opt(17, 0, 0).unwrap(),
    );
    workout.end_time = date.and_hms_opt(18, 5, 30);
    workout.notes = "Deep squats".to_string();
    workout.exercises[0].sets = vec![
        set(100.0, 10, 2, true),
        set(102.5, 8, 1, true),
        set(102.5, 0, 0, false),
    ];
    workout
});

fn set(weight: f32, reps: u32, rir: u32, completed: bool) -> domain::SetRecord {
    domain::SetRecord {
        weight: domain::Weight::new(weight).unwrap(),
        reps: domain::Reps::new(reps).unwrap(),
        rir: domain::RIR::new(rir).unwrap(),
        completed,
    }
}
