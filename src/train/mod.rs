pub mod config;
pub mod progress;
pub mod trainer;

pub use config::TrainConfig;
pub use progress::TrainProgress;
pub use trainer::{train, TrainReport};
