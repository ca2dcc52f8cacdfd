use std::fmt;

use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Load of a set in kg.
///
/// A weight of zero marks a set whose weight has not been entered yet.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Reps in reserve: the number of additional reps the lifter could have performed.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct RIR(u32);

impl RIR {
    pub const ZERO: RIR = RIR(0);

    pub fn new(value: u32) -> Result<Self, RIRError> {
        if value > 20 {
            return Err(RIRError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for RIR {
    type Error = RIRError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(RIR::ZERO);
        }
        match value.parse::<u32>() {
            Ok(parsed_value) => RIR::new(parsed_value),
            Err(_) => Err(RIRError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RIRError {
    #[error("RIR must be in the range 0 to 20")]
    OutOfRange,
    #[error("RIR must be an integer")]
    ParseError,
}

/// Inclusive target range written as `min-max`, e.g. a rep range of `8-12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRange {
    pub min: u32,
    pub max: u32,
}

impl TargetRange {
    pub fn new(min: u32, max: u32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }

        Ok(Self { min, max })
    }

    /// Midpoint rounded down, used as the single target value of the range.
    #[must_use]
    pub fn midpoint(&self) -> u32 {
        u32::midpoint(self.min, self.max)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f32 {
        (self.min as f32 + self.max as f32) / 2.0
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl TryFrom<&str> for TargetRange {
    type Error = RangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || RangeError::InvalidFormat(value.to_string());
        let (min, max) = value.split_once('-').ok_or_else(invalid)?;
        let min = min.trim().parse::<u32>().map_err(|_| invalid())?;
        let max = max.trim().parse::<u32>().map_err(|_| invalid())?;
        TargetRange::new(min, max)
    }
}

impl fmt::Display for TargetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RangeError {
    #[error("Range must have the form min-max (\"{0}\")")]
    InvalidFormat(String),
    #[error("Range minimum must not exceed maximum ({min} > {max})")]
    Inverted { min: u32, max: u32 },
}

/// One logged set of a workout.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SetRecord {
    pub weight: Weight,
    pub reps: Reps,
    pub rir: RIR,
    pub completed: bool,
}

impl SetRecord {
    /// Only completed sets with a weight and at least one rep count towards
    /// statistics and the performance history.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.completed && f32::from(self.weight) > 0.0 && u32::from(self.reps) > 0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn volume(&self) -> f32 {
        f32::from(self.weight) * u32::from(self.reps) as f32
    }
}
