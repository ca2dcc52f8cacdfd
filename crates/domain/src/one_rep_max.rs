use strum::{Display, EnumString};

/// Strength curve used to extrapolate a one-repetition maximum from a set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Formula {
    #[default]
    Brzycki,
    Epley,
    Lander,
}

/// Brzycki's curve is only defined up to 36 reps.
const BRZYCKI_MAX_REPS: u32 = 36;

/// Weight of a previous estimate when a set does not exceed it.
const SMOOTHING: f32 = 0.9;

/// Estimate the one-repetition maximum of a set.
///
/// Reps in reserve count as reps the lifter could additionally have
/// performed. A result of zero means there is no usable estimate, which is
/// the case for a non-positive weight, zero effective reps or an effective
/// rep count beyond the range of the formula.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_one_rep_max(weight: f32, reps: u32, rir: u32, formula: Formula) -> f32 {
    let effective_reps = reps.saturating_add(rir);

    if weight.is_nan() || weight <= 0.0 || effective_reps == 0 {
        return 0.0;
    }

    let estimate = match formula {
        Formula::Brzycki => brzycki(weight, effective_reps),
        Formula::Epley => weight * (1.0 + 0.0333 * effective_reps as f32),
        Formula::Lander => {
            let denominator = 101.3 - 2.671_23 * effective_reps as f32;
            if denominator <= 0.0 {
                return 0.0;
            }
            100.0 * weight / denominator
        }
    };

    estimate.max(0.0)
}

#[allow(clippy::cast_precision_loss)]
fn brzycki(weight: f32, reps: u32) -> f32 {
    weight * 36.0 / (37.0 - reps.min(BRZYCKI_MAX_REPS) as f32)
}

/// Inverse of the Brzycki curve: the weight that can be lifted for `reps`
/// given a one-repetition maximum.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn inverse_brzycki(one_rep_max: f32, reps: u32) -> f32 {
    one_rep_max * (37.0 - reps.min(BRZYCKI_MAX_REPS) as f32) / 36.0
}

/// Fold a new set into an existing estimate.
///
/// Higher estimates are adopted immediately. Lower ones only pull the
/// estimate down by a tenth of the difference.
#[must_use]
pub fn update_estimated_one_rep_max(current: Option<f32>, weight: f32, reps: u32, rir: u32) -> f32 {
    let new_estimate = estimate_one_rep_max(weight, reps, rir, Formula::Brzycki);

    match current {
        Some(current) if current > 0.0 && new_estimate <= current => {
            current * SMOOTHING + new_estimate * (1.0 - SMOOTHING)
        }
        _ => new_estimate,
    }
}
