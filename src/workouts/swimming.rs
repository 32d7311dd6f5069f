//! Swimming training.
//!
//! Speed is derived from pool geometry (length times laps) rather than from
//! the stroke count. Distance still uses the stroke count with a longer
//! per-stroke length.

use crate::workouts::training::Training;
use crate::workouts::types::{WorkoutInputs, WorkoutResult, WorkoutType, M_IN_KM};

/// Distance covered by one stroke in meters.
const LEN_STROKE: f64 = 1.38;
/// Speed offset in the swimming calorie formula.
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
/// Weight multiplier in the swimming calorie formula.
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Pool swimming session.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    inputs: WorkoutInputs,
    /// Pool length in meters
    length_pool: f64,
    /// Number of pool lengths swum
    count_pool: u32,
}

impl Swimming {
    /// Create a swimming training.
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> WorkoutResult<Self> {
        Ok(Self {
            inputs: WorkoutInputs::new(action, duration_h, weight_kg)?,
            length_pool,
            count_pool,
        })
    }

    /// Pool length in meters.
    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool lengths swum.
    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn inputs(&self) -> &WorkoutInputs {
        &self.inputs
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.inputs.duration_h()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.inputs.weight_kg()
    }
}
