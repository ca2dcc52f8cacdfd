use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    BestPerformance, Exercise, ExerciseRepository, ExerciseService, MuscleFrequency, MuscleVolume,
    Name, PerformanceHistory, PerformanceHistoryRepository, PerformanceService, Plan, PlanID,
    PlanRepository, PlanService, ReadError, StatsSummary, Timeframe, Workout, WorkoutRepository,
    WorkoutService, WriteError, analyze_frequency, analyze_volume, default_exercises,
    previous_best_performance, stats_summary, update_performance_history, volume_progression,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: ExerciseRepository + PlanRepository + WorkoutRepository + PerformanceHistoryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises().map(|exercises| {
                if exercises.is_empty() {
                    default_exercises()
                } else {
                    exercises
                }
            }),
            ReadError,
            "get",
            "exercises"
        )
    }

    fn create_exercise(&self, exercise: Exercise) -> Result<Exercise, WriteError> {
        log_on_error!(
            self.get_exercises()
                .map_err(WriteError::from)
                .and_then(|mut exercises| {
                    exercises.push(exercise.clone());
                    self.repository.write_exercises(&exercises)?;
                    debug!("created exercise {}", exercise.name);
                    Ok(exercise)
                }),
            WriteError,
            "create",
            "exercise"
        )
    }

    fn delete_exercise(&self, name: &Name) -> Result<Name, WriteError> {
        log_on_error!(
            self.get_exercises()
                .map_err(WriteError::from)
                .and_then(|mut exercises| {
                    exercises.retain(|e| e.name != *name);
                    self.repository.write_exercises(&exercises)?;
                    Ok(name.clone())
                }),
            WriteError,
            "delete",
            "exercise"
        )
    }
}

impl<R: PlanRepository> Service<R> {
    fn read_plan(&self, id: PlanID) -> Result<Plan, ReadError> {
        self.repository
            .read_plans()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ReadError::NotFound("plan".to_string()))
    }
}

impl<R: PlanRepository> PlanService for Service<R> {
    fn get_plans(&self) -> Result<Vec<Plan>, ReadError> {
        log_on_error!(self.repository.read_plans(), ReadError, "get", "plans")
    }

    fn create_plan(&self, plan: Plan) -> Result<Plan, WriteError> {
        log_on_error!(
            self.repository
                .read_plans()
                .map_err(WriteError::from)
                .and_then(|mut plans| {
                    plans.push(plan.clone());
                    self.repository.write_plans(&plans)?;
                    debug!("created plan {}", plan.name);
                    Ok(plan)
                }),
            WriteError,
            "create",
            "plan"
        )
    }

    fn replace_plan(&self, plan: Plan) -> Result<Plan, WriteError> {
        log_on_error!(
            self.repository
                .read_plans()
                .map_err(WriteError::from)
                .and_then(|mut plans| {
                    let Some(existing) = plans.iter_mut().find(|p| p.id == plan.id) else {
                        return Err(ReadError::NotFound("plan".to_string()).into());
                    };
                    *existing = plan.clone();
                    self.repository.write_plans(&plans)?;
                    Ok(plan)
                }),
            WriteError,
            "replace",
            "plan"
        )
    }

    fn delete_plan(&self, id: PlanID) -> Result<PlanID, WriteError> {
        log_on_error!(
            self.repository
                .read_plans()
                .map_err(WriteError::from)
                .and_then(|mut plans| {
                    plans.retain(|p| p.id != id);
                    self.repository.write_plans(&plans)?;
                    Ok(id)
                }),
            WriteError,
            "delete",
            "plan"
        )
    }

    fn analyze_plan(
        &self,
        id: PlanID,
    ) -> Result<(Vec<MuscleVolume>, Vec<MuscleFrequency>), ReadError> {
        log_on_error!(
            self.read_plan(id)
                .map(|plan| (analyze_volume(&plan, plan.goal), analyze_frequency(&plan))),
            ReadError,
            "analyze",
            "plan"
        )
    }
}

impl<R> WorkoutService for Service<R>
where
    R: WorkoutRepository + PerformanceHistoryRepository,
{
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    fn complete_workout(&self, workout: Workout) -> Result<Workout, WriteError> {
        log_on_error!(
            self.repository
                .read_workouts()
                .and_then(|workouts| Ok((workouts, self.repository.read_performance_history()?)))
                .map_err(WriteError::from)
                .and_then(|(mut workouts, history)| {
                    let history = update_performance_history(&workout, &history);
                    workouts.push(workout.clone());
                    self.repository.write_workouts(&workouts)?;
                    self.repository.write_performance_history(&history)?;
                    debug!(
                        "completed workout with {} sets and {} kg volume",
                        workout.total_sets(),
                        workout.total_volume()
                    );
                    Ok(workout)
                }),
            WriteError,
            "complete",
            "workout"
        )
    }

    fn get_previous_best_performance(
        &self,
        name: &Name,
    ) -> Result<Option<BestPerformance>, ReadError> {
        log_on_error!(
            self.repository
                .read_workouts()
                .map(|workouts| previous_best_performance(name, &workouts)),
            ReadError,
            "get",
            "previous best performance"
        )
    }

    fn get_stats_summary(&self, today: NaiveDate) -> Result<StatsSummary, ReadError> {
        log_on_error!(
            self.repository
                .read_workouts()
                .map(|workouts| stats_summary(&workouts, today)),
            ReadError,
            "get",
            "stats summary"
        )
    }

    fn get_volume_progression(
        &self,
        timeframe: Timeframe,
        today: NaiveDate,
    ) -> Result<Vec<(NaiveDate, f32)>, ReadError> {
        log_on_error!(
            self.repository
                .read_workouts()
                .map(|workouts| volume_progression(&workouts, timeframe, today)),
            ReadError,
            "get",
            "volume progression"
        )
    }
}

impl<R: PerformanceHistoryRepository> PerformanceService for Service<R> {
    fn get_performance_history(&self) -> Result<BTreeMap<Name, PerformanceHistory>, ReadError> {
        log_on_error!(
            self.repository.read_performance_history(),
            ReadError,
            "get",
            "performance history"
        )
    }
}
