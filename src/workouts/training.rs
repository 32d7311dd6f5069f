//! Shared training behavior.
//!
//! Every workout variant implements [`Training`]. Distance and speed come
//! with default formulas based on the action count; the calorie formula has
//! no default and must be provided by each variant.

use crate::report::summary::Summary;
use crate::workouts::types::{WorkoutInputs, WorkoutType, LEN_STEP, M_IN_KM};

/// A completed training session that can report its metrics.
pub trait Training: std::fmt::Debug + Send + Sync {
    /// Kind of this training.
    fn workout_type(&self) -> WorkoutType;

    /// Raw inputs shared by every training.
    fn inputs(&self) -> &WorkoutInputs;

    /// Distance covered by one action in meters.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance covered in kilometers.
    fn distance_km(&self) -> f64 {
        self.inputs().action() as f64 * self.step_length() / M_IN_KM
    }

    /// Average speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.inputs().duration_h()
    }

    /// Estimated calories burned.
    fn spent_calories(&self) -> f64;

    /// Build the summary for this training.
    fn show_training_info(&self) -> Summary {
        Summary::new(
            self.workout_type().to_string(),
            self.inputs().duration_h(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}
