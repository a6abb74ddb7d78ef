// This binary crate is intentionally minimal.
// All network and training logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example ramp
fn main() {
    println!("backprop-nn: a minimal gradient-descent neural network in Rust.");
    println!("Run `cargo run --example ramp` to see the ramp-learning demo.");
}
