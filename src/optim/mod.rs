pub mod rate;

pub use rate::RateStrategy;
