pub mod backprop;
pub mod network;

pub use network::Network;
