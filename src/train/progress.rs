use serde::{Serialize, Deserialize};

/// Per-iteration statistics emitted by the training loop.
///
/// When a `progress` sender is configured, the loop sends one of these
/// after every weight update. It is an observability side channel only:
/// receivers may chart or log the values, and the run is unaffected if
/// they go away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainProgress {
    /// 1-based count of completed weight updates.
    pub iteration: usize,
    /// Mean-squared error measured before this iteration's update.
    pub mse: f32,
    /// Learning rate applied by this iteration's update.
    pub rate: f32,
}
