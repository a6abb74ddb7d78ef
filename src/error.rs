use std::fmt;

/// Errors reported by network construction and training.
///
/// Construction problems (`InvalidTopology`, `ShapeMismatch`) are detected
/// before any state is built or mutated. `DidNotConverge` is returned by the
/// training loop when the iteration cap is reached with the error still
/// above tolerance; the network keeps the weights of the last iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidTopology(String),
    ShapeMismatch(String),
    DidNotConverge { iterations: usize, mse: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTopology(msg) => write!(f, "invalid topology: {msg}"),
            Error::ShapeMismatch(msg) => write!(f, "shape mismatch: {msg}"),
            Error::DidNotConverge { iterations, mse } => {
                write!(f, "did not converge within {iterations} iterations (mse {mse})")
            }
        }
    }
}

impl std::error::Error for Error {}
