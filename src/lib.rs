pub mod error;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use math::scalar::{logistic, mean_squared_error, round_to};
pub use network::network::Network;
pub use optim::rate::RateStrategy;
pub use train::config::TrainConfig;
pub use train::progress::TrainProgress;
pub use train::trainer::{train, TrainReport};
