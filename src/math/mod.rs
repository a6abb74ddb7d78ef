pub mod matrix;
pub mod scalar;

pub use matrix::Matrix;
pub use scalar::{logistic, mean_squared_error, round_to};
