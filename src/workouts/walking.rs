//! Sports walking training.

use crate::workouts::training::Training;
use crate::workouts::types::{
    WorkoutError, WorkoutInputs, WorkoutResult, WorkoutType, MIN_IN_HOUR,
};

/// Weight multiplier in the walking calorie formula.
const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Multiplier for the speed-over-height term.
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking session measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    inputs: WorkoutInputs,
    /// Athlete height in centimeters
    height_cm: f64,
}

impl SportsWalking {
    /// Create a walking training.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> WorkoutResult<Self> {
        let inputs = WorkoutInputs::new(action, duration_h, weight_kg)?;

        if !height_cm.is_finite() || height_cm == 0.0 {
            return Err(WorkoutError::InvalidHeight(height_cm));
        }

        Ok(Self { inputs, height_cm })
    }

    /// Athlete height in centimeters.
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn inputs(&self) -> &WorkoutInputs {
        &self.inputs
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.inputs.weight_kg();
        let speed_over_height = floor_div(self.mean_speed_kmh().powi(2), self.height_cm);

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_over_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * (self.inputs.duration_h() * MIN_IN_HOUR)
    }
}

/// Floored quotient of `a / b`, derived from the remainder.
///
/// Flooring the rounded quotient can land one too high when `a / b` rounds
/// up to a whole number (`1.0 / 0.1` is exactly `10.0`, yet `0.1` fits into
/// `1.0` only nine whole times). Working from `a % b` avoids that.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}
