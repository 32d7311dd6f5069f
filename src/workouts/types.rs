//! Workout types, shared inputs and errors.
//!
//! Defines the workout type codes understood by the dispatcher, the raw
//! inputs every training carries, and the error taxonomy for building and
//! computing a workout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distance covered by one action (step or stroke) in meters.
pub const LEN_STEP: f64 = 0.65;
/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Kind of training session, identified by a three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Pool swimming (`SWM`)
    Swimming,
    /// Running (`RUN`)
    Running,
    /// Sports walking (`WLK`)
    SportsWalking,
}

impl WorkoutType {
    /// All known workout types.
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Three-letter code used in sensor packages.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    /// Look up a workout type by its package code.
    ///
    /// Codes are matched exactly, so `"run"` is not a running workout.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Number of positional values a package of this type must carry.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutType::Swimming => 5,
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Swimming => write!(f, "Swimming"),
            WorkoutType::Running => write!(f, "Running"),
            WorkoutType::SportsWalking => write!(f, "SportsWalking"),
        }
    }
}

/// Raw inputs shared by every training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInputs {
    /// Number of actions (steps or strokes)
    action: u32,
    /// Duration in hours
    duration_h: f64,
    /// Athlete weight in kilograms
    weight_kg: f64,
}

impl WorkoutInputs {
    /// Create workout inputs.
    ///
    /// Duration is a divisor in every speed formula, so it must be a
    /// finite, non-zero number of hours.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        if !duration_h.is_finite() || duration_h == 0.0 {
            return Err(WorkoutError::InvalidDuration(duration_h));
        }

        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }

    /// Number of actions.
    pub fn action(&self) -> u32 {
        self.action
    }

    /// Duration in hours.
    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Errors raised while building or computing a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Package code does not name a known workout type.
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// Package carries the wrong number of positional values.
    #[error("Workout {code} expects {expected} values, got {actual}")]
    ArgumentCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// Duration is zero or not a finite number.
    #[error("Invalid duration: {0} h (must be non-zero)")]
    InvalidDuration(f64),

    /// Height is zero or not a finite number.
    #[error("Invalid height: {0} cm (must be non-zero)")]
    InvalidHeight(f64),

    /// A count field is negative or fractional.
    #[error("Invalid {field}: {value} (expected a whole number)")]
    InvalidCount { field: &'static str, value: f64 },
}

/// Result type for workout operations.
pub type WorkoutResult<T> = Result<T, WorkoutError>;
