use std::sync::mpsc;

use crate::train::progress::TrainProgress;

/// Iteration cap applied by [`TrainConfig::new`].
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Configuration for a [`train`](crate::train::train) run.
///
/// # Fields
/// - `tolerance`      - training stops once the mean-squared error falls
///   to this value or below
/// - `max_iterations` - hard cap on weight updates; hitting it before
///   converging ends the run with an error instead of looping forever
/// - `progress`       - optional channel sender; one [`TrainProgress`] is
///   sent after every completed weight update
pub struct TrainConfig {
    pub tolerance: f32,
    pub max_iterations: usize,
    pub progress: Option<mpsc::Sender<TrainProgress>>,
}

impl TrainConfig {
    /// A config with the default iteration cap and no progress channel.
    pub fn new(tolerance: f32) -> Self {
        TrainConfig {
            tolerance,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            progress: None,
        }
    }
}
