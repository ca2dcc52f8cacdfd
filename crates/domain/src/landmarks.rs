use std::fmt;

use strum::{Display, EnumIter, EnumString};

use crate::{Muscle, TargetRange};

/// Sets taken with at most this many reps in reserve count as full working sets.
pub const WORKING_SET_RIR_THRESHOLD: f32 = 3.0;

/// Weekly set volume landmarks of a muscle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeLandmarks {
    /// Maintenance volume
    pub mv: f32,
    /// Minimum effective volume
    pub mev: f32,
    /// Maximum adaptive volume
    pub mav: f32,
    /// Maximum recoverable volume
    pub mrv: f32,
}

impl VolumeLandmarks {
    const fn new(mv: f32, mev: f32, mav: f32, mrv: f32) -> Self {
        Self { mv, mev, mav, mrv }
    }

    #[must_use]
    pub fn target(&self, preset: &GoalPreset) -> f32 {
        let base = match preset.volume_focus {
            VolumeFocus::Mev => self.mev,
            VolumeFocus::Mav => self.mav,
            VolumeFocus::Mrv => self.mrv,
            VolumeFocus::MevToLowerMav => self.mev + 0.3 * (self.mav - self.mev),
            VolumeFocus::MavToMrv => self.mav + 0.5 * (self.mrv - self.mav),
        };
        base * preset.volume_target
    }
}

impl Muscle {
    #[must_use]
    pub fn volume_landmarks(self) -> VolumeLandmarks {
        match self {
            Muscle::Chest => VolumeLandmarks::new(4.0, 8.0, 16.0, 22.0),
            Muscle::FrontDelts => VolumeLandmarks::new(0.0, 0.0, 8.0, 12.0),
            Muscle::SideDelts => VolumeLandmarks::new(6.0, 8.0, 20.0, 26.0),
            Muscle::RearDelts => VolumeLandmarks::new(0.0, 6.0, 16.0, 26.0),
            Muscle::Lats => VolumeLandmarks::new(6.0, 10.0, 18.0, 25.0),
            Muscle::Traps => VolumeLandmarks::new(0.0, 4.0, 16.0, 26.0),
            Muscle::Rhomboids => VolumeLandmarks::new(4.0, 8.0, 14.0, 20.0),
            Muscle::LowerBack => VolumeLandmarks::new(2.0, 4.0, 10.0, 14.0),
            Muscle::Biceps => VolumeLandmarks::new(4.0, 8.0, 17.0, 26.0),
            Muscle::Triceps => VolumeLandmarks::new(4.0, 6.0, 12.0, 18.0),
            Muscle::Forearms => VolumeLandmarks::new(2.0, 4.0, 12.0, 20.0),
            Muscle::Abs => VolumeLandmarks::new(0.0, 6.0, 20.0, 25.0),
            Muscle::Obliques => VolumeLandmarks::new(0.0, 4.0, 14.0, 20.0),
            Muscle::Quads => VolumeLandmarks::new(6.0, 8.0, 15.0, 20.0),
            Muscle::Hamstrings => VolumeLandmarks::new(4.0, 6.0, 12.0, 20.0),
            Muscle::Glutes => VolumeLandmarks::new(0.0, 4.0, 12.0, 16.0),
            Muscle::Calves => VolumeLandmarks::new(6.0, 8.0, 14.0, 20.0),
            Muscle::HipFlexors => VolumeLandmarks::new(0.0, 2.0, 8.0, 12.0),
            Muscle::Adductors => VolumeLandmarks::new(0.0, 4.0, 10.0, 16.0),
            Muscle::SerratusAnterior => VolumeLandmarks::new(0.0, 2.0, 8.0, 12.0),
            Muscle::Brachialis => VolumeLandmarks::new(0.0, 4.0, 10.0, 16.0),
            Muscle::CoreStabilizers => VolumeLandmarks::new(0.0, 4.0, 12.0, 18.0),
        }
    }

    /// Recommended number of training days per week on which the muscle is trained.
    #[must_use]
    pub fn frequency_recommendation(self) -> FrequencyRecommendation {
        match self {
            Muscle::Chest
            | Muscle::Lats
            | Muscle::LowerBack
            | Muscle::Quads
            | Muscle::Hamstrings
            | Muscle::Glutes => FrequencyRecommendation::new(1, 2, 3),
            Muscle::FrontDelts
            | Muscle::Rhomboids
            | Muscle::Triceps
            | Muscle::HipFlexors
            | Muscle::Adductors
            | Muscle::SerratusAnterior
            | Muscle::Brachialis => FrequencyRecommendation::new(1, 2, 4),
            Muscle::SideDelts
            | Muscle::RearDelts
            | Muscle::Traps
            | Muscle::Biceps
            | Muscle::Forearms
            | Muscle::Abs
            | Muscle::Obliques
            | Muscle::Calves
            | Muscle::CoreStabilizers => FrequencyRecommendation::new(2, 3, 6),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRecommendation {
    pub min: u32,
    pub optimal: u32,
    pub max: u32,
}

impl FrequencyRecommendation {
    const fn new(min: u32, optimal: u32, max: u32) -> Self {
        Self { min, optimal, max }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum TrainingGoal {
    Strength,
    #[default]
    Hypertrophy,
    Endurance,
    Power,
    GeneralFitness,
    Specialization,
}

impl TrainingGoal {
    #[must_use]
    pub fn preset(self) -> GoalPreset {
        let range = |min, max| TargetRange { min, max };
        match self {
            TrainingGoal::Strength => GoalPreset {
                rep_range: range(3, 6),
                rir_range: range(1, 3),
                rest_range: range(180, 300),
                volume_focus: VolumeFocus::Mev,
                volume_target: 1.0,
            },
            TrainingGoal::Hypertrophy => GoalPreset {
                rep_range: range(8, 12),
                rir_range: range(1, 3),
                rest_range: range(60, 120),
                volume_focus: VolumeFocus::Mav,
                volume_target: 1.0,
            },
            TrainingGoal::Endurance => GoalPreset {
                rep_range: range(15, 20),
                rir_range: range(2, 4),
                rest_range: range(30, 60),
                volume_focus: VolumeFocus::MevToLowerMav,
                volume_target: 1.0,
            },
            TrainingGoal::Power => GoalPreset {
                rep_range: range(1, 5),
                rir_range: range(2, 4),
                rest_range: range(180, 300),
                volume_focus: VolumeFocus::Mev,
                volume_target: 0.8,
            },
            TrainingGoal::GeneralFitness => GoalPreset {
                rep_range: range(8, 15),
                rir_range: range(2, 3),
                rest_range: range(60, 90),
                volume_focus: VolumeFocus::MevToLowerMav,
                volume_target: 1.0,
            },
            TrainingGoal::Specialization => GoalPreset {
                rep_range: range(6, 12),
                rir_range: range(0, 2),
                rest_range: range(90, 180),
                volume_focus: VolumeFocus::MavToMrv,
                volume_target: 1.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalPreset {
    pub rep_range: TargetRange,
    pub rir_range: TargetRange,
    /// Rest between sets in seconds
    pub rest_range: TargetRange,
    pub volume_focus: VolumeFocus,
    pub volume_target: f32,
}

impl GoalPreset {
    /// Goals anchored at the minimum effective volume treat anything close
    /// to the target as optimal.
    #[must_use]
    pub fn is_mev_anchored(&self) -> bool {
        self.volume_focus == VolumeFocus::Mev
    }
}

/// Landmark (or blend of landmarks) a goal aims its weekly volume at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeFocus {
    Mev,
    Mav,
    Mrv,
    MevToLowerMav,
    MavToMrv,
}

impl From<&str> for VolumeFocus {
    /// Unknown names fall back to the maximum adaptive volume.
    fn from(value: &str) -> Self {
        match value.trim() {
            "MEV" => VolumeFocus::Mev,
            "MRV" => VolumeFocus::Mrv,
            "MEV to lower MAV" => VolumeFocus::MevToLowerMav,
            "MAV to MRV" => VolumeFocus::MavToMrv,
            _ => VolumeFocus::Mav,
        }
    }
}

impl fmt::Display for VolumeFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VolumeFocus::Mev => "MEV",
                VolumeFocus::Mav => "MAV",
                VolumeFocus::Mrv => "MRV",
                VolumeFocus::MevToLowerMav => "MEV to lower MAV",
                VolumeFocus::MavToMrv => "MAV to MRV",
            }
        )
    }
}
