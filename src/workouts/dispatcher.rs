//! Build trainings from raw sensor packages.
//!
//! A package is a workout type code plus positional values. Values are
//! unpacked in a fixed order per workout type:
//!
//! - `SWM`: action, duration, weight, pool length, pool count
//! - `RUN`: action, duration, weight
//! - `WLK`: action, duration, weight, height

use crate::workouts::running::Running;
use crate::workouts::swimming::Swimming;
use crate::workouts::training::Training;
use crate::workouts::types::{WorkoutError, WorkoutResult, WorkoutType};
use crate::workouts::walking::SportsWalking;

/// Read a sensor package and build the matching training.
pub fn read_package(code: &str, data: &[f64]) -> WorkoutResult<Box<dyn Training>> {
    let Some(workout_type) = WorkoutType::from_code(code) else {
        tracing::warn!("Unknown workout type: {}", code);
        return Err(WorkoutError::UnknownWorkoutType(code.to_string()));
    };

    build_training(workout_type, data)
}

/// Build a training of a known type from positional values.
pub fn build_training(workout_type: WorkoutType, data: &[f64]) -> WorkoutResult<Box<dyn Training>> {
    if data.len() != workout_type.arity() {
        return Err(WorkoutError::ArgumentCount {
            code: workout_type.code().to_string(),
            expected: workout_type.arity(),
            actual: data.len(),
        });
    }

    let action = to_count("action", data[0])?;
    let duration_h = data[1];
    let weight_kg = data[2];

    let training: Box<dyn Training> = match workout_type {
        WorkoutType::Swimming => Box::new(Swimming::new(
            action,
            duration_h,
            weight_kg,
            data[3],
            to_count("pool count", data[4])?,
        )?),
        WorkoutType::Running => Box::new(Running::new(action, duration_h, weight_kg)?),
        WorkoutType::SportsWalking => {
            Box::new(SportsWalking::new(action, duration_h, weight_kg, data[3])?)
        }
    };

    tracing::debug!("Built {} training from {} values", workout_type, data.len());

    Ok(training)
}

/// Convert a package value to a whole-number count.
fn to_count(field: &'static str, value: f64) -> WorkoutResult<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(WorkoutError::InvalidCount { field, value });
    }
    Ok(value as u32)
}
