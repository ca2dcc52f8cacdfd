use std::collections::BTreeSet;

use chrono::{Datelike, Days, Months, NaiveDate};
use strum::{Display, EnumString};

use crate::Workout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Interval {
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }
}

impl From<std::ops::RangeInclusive<NaiveDate>> for Interval {
    fn from(value: std::ops::RangeInclusive<NaiveDate>) -> Self {
        Interval {
            first: *value.start(),
            last: *value.end(),
        }
    }
}

/// Monday of the week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Monthly training summary shown on the dashboard.
///
/// Changes compare the current month with the previous month.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub workouts: usize,
    /// Percent
    pub workouts_change: i32,
    pub training_hours: f32,
    pub training_hours_change: f32,
    pub volume: f32,
    /// Percent
    pub volume_change: i32,
    /// Number of consecutive days with a workout, ending today.
    pub streak: u32,
}

#[must_use]
pub fn stats_summary(workouts: &[Workout], today: NaiveDate) -> StatsSummary {
    let current_month_start = month_start(today);
    let previous_month_start = current_month_start
        .checked_sub_months(Months::new(1))
        .unwrap_or(current_month_start);

    let current: Vec<&Workout> = workouts
        .iter()
        .filter(|w| w.date() >= current_month_start)
        .collect();
    let previous: Vec<&Workout> = workouts
        .iter()
        .filter(|w| w.date() >= previous_month_start && w.date() < current_month_start)
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let workouts_change = percent_change(current.len() as f32, previous.len() as f32);

    let current_hours = training_hours(&current);
    let previous_hours = training_hours(&previous);
    let training_hours_change = if previous_hours > 0.0 {
        current_hours - previous_hours
    } else {
        current_hours
    };

    let current_volume: f32 = current.iter().map(|w| w.total_volume()).sum();
    let previous_volume: f32 = previous.iter().map(|w| w.total_volume()).sum();

    StatsSummary {
        workouts: current.len(),
        workouts_change,
        training_hours: current_hours,
        training_hours_change,
        volume: current_volume.round(),
        volume_change: percent_change(current_volume, previous_volume),
        streak: streak(workouts, today),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn percent_change(current: f32, previous: f32) -> i32 {
    if previous > 0.0 {
        ((current - previous) / previous * 100.0).round() as i32
    } else {
        100
    }
}

#[allow(clippy::cast_precision_loss)]
fn training_hours(workouts: &[&Workout]) -> f32 {
    workouts
        .iter()
        .filter_map(|w| w.duration())
        .map(|d| d.num_seconds() as f32 / 3600.0)
        .sum()
}

fn streak(workouts: &[Workout], today: NaiveDate) -> u32 {
    let dates = workouts.iter().map(Workout::date).collect::<BTreeSet<_>>();

    if dates.last() != Some(&today) {
        return 0;
    }

    let mut streak = 0;
    let mut expected = Some(today);
    for date in dates.iter().rev() {
        if Some(*date) != expected {
            break;
        }
        streak += 1;
        expected = date.pred_opt();
    }

    streak
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Timeframe {
    Week,
    Month,
    Year,
}

/// Training volume over time.
///
/// Each entry holds the first day of a period and the volume of all workouts
/// within that period:
///
///  - `Week`: the last 7 days, one entry per day
///  - `Month`: 7-day periods starting at the first day of the current month
///  - `Year`: the last 12 months, one entry per month
#[must_use]
pub fn volume_progression(
    workouts: &[Workout],
    timeframe: Timeframe,
    today: NaiveDate,
) -> Vec<(NaiveDate, f32)> {
    let periods: Vec<Interval> = match timeframe {
        Timeframe::Week => (0..7)
            .rev()
            .map(|i| today - Days::new(i))
            .map(|d| (d..=d).into())
            .collect(),
        Timeframe::Month => month_start(today)
            .iter_weeks()
            .take_while(|d| *d <= today)
            .map(|d| (d..=d + Days::new(6)).into())
            .collect(),
        Timeframe::Year => (0..12)
            .rev()
            .filter_map(|i| month_start(today).checked_sub_months(Months::new(i)))
            .filter_map(|first| {
                let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
                Some((first..=last).into())
            })
            .collect(),
    };

    periods
        .into_iter()
        .map(|period| {
            (
                period.first,
                workouts
                    .iter()
                    .filter(|w| period.contains(w.date()))
                    .map(Workout::total_volume)
                    .sum(),
            )
        })
        .collect()
}
