use rand::rngs::StdRng;
use rand::SeedableRng;

use backprop_nn::{Matrix, Network};

#[test]
fn explicit_weights_drive_the_evaluation() {
    let weights = vec![Matrix::from_rows(vec![
        vec![0.0, 0.1],
        vec![0.0, 0.3],
    ])];
    let mut network = Network::with_weights(&[1, 1], weights).unwrap();

    // Output unit 1 sees the row sum 0.3 scaled by the stimulus.
    let output = network.evaluate(&[1.0]).to_vec();
    let expected = 1.0 / (1.0 + (-0.3f32).exp());
    assert!((output[1] - expected).abs() < 1e-6);
}

#[test]
fn serialized_weights_rebuild_an_identical_network() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut network = Network::with_rng(&[2, 3, 2], &mut rng).unwrap();
    let stimulus = [0.25, 0.75];
    let before = network.evaluate(&stimulus).to_vec();

    let encoded = serde_json::to_string(network.weights()).unwrap();
    let decoded: Vec<Matrix> = serde_json::from_str(&encoded).unwrap();
    let mut rebuilt = Network::with_weights(&[2, 3, 2], decoded).unwrap();

    assert_eq!(rebuilt.evaluate(&stimulus), before.as_slice());
}
