//! Running training.

use crate::workouts::training::Training;
use crate::workouts::types::{WorkoutInputs, WorkoutResult, WorkoutType, MIN_IN_HOUR, M_IN_KM};

/// Speed multiplier in the running calorie formula.
const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
/// Speed offset in the running calorie formula.
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running session measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    inputs: WorkoutInputs,
}

impl Running {
    /// Create a running training.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        Ok(Self {
            inputs: WorkoutInputs::new(action, duration_h, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn inputs(&self) -> &WorkoutInputs {
        &self.inputs
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_MEAN_SPEED_SHIFT)
            * self.inputs.weight_kg()
            / M_IN_KM
            * (self.inputs.duration_h() * MIN_IN_HOUR)
    }
}
