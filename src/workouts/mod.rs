//! Workout module: training variants and package dispatch.

pub mod dispatcher;
pub mod running;
pub mod swimming;
pub mod training;
pub mod types;
pub mod walking;

pub use dispatcher::{build_training, read_package};
pub use running::Running;
pub use swimming::Swimming;
pub use training::Training;
pub use types::{WorkoutError, WorkoutInputs, WorkoutResult, WorkoutType};
pub use walking::SportsWalking;
