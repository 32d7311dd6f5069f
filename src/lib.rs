//! FitTrack - Fitness Tracker Summaries
//!
//! Turns raw sensor packages (a workout type code plus positional readings)
//! into training summaries: distance, average speed and calories burned for
//! running, sports walking and pool swimming.

pub mod report;
pub mod runner;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use report::summary::Summary;
pub use runner::{BatchReport, FailurePolicy, Package, RunError, Runner};
pub use storage::config::AppConfig;
pub use workouts::dispatcher::read_package;
pub use workouts::training::Training;
pub use workouts::types::{WorkoutError, WorkoutType};
