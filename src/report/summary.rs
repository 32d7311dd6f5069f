//! Training summary report.

use serde::{Deserialize, Serialize};

/// Computed report for one training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Display name of the workout type
    training_type: String,
    /// Duration in hours
    duration: f64,
    /// Distance in kilometers
    distance: f64,
    /// Average speed in km/h
    speed: f64,
    /// Calories burned
    calories: f64,
}

impl Summary {
    /// Create a summary from computed values.
    pub fn new(training_type: String, duration: f64, distance: f64, speed: f64, calories: f64) -> Self {
        Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Render the summary as a single report line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
