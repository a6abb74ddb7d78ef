use backprop_nn::{round_to, train, Network, RateStrategy, TrainConfig};

const UNITS: usize = 16;

fn main() -> backprop_nn::Result<()> {
    let topology = vec![UNITS, UNITS, UNITS];

    // One stimulus ramping up, one desired response ramping down. The
    // desired vector pairs with the bias-augmented output layer, so it
    // carries a leading 0.0 for the bias slot.
    let stimulus: Vec<f32> = (0..UNITS).map(|i| i as f32 / UNITS as f32).collect();
    let mut desired = vec![0.0];
    desired.extend((0..UNITS).map(|i| 1.0 - i as f32 / UNITS as f32));

    let config = TrainConfig::new(1e-5);

    let mut constant_net = Network::new(&topology)?;
    let mut constant = RateStrategy::constant(0.25);
    let report = train(&mut constant_net, &stimulus, &desired, &mut constant, &config)?;
    println!("constant rate: {} iterations, mse {:.8}", report.iterations, report.mse);

    let mut plateau_net = Network::new(&topology)?;
    let mut plateau = RateStrategy::plateau();
    let report = train(&mut plateau_net, &stimulus, &desired, &mut plateau, &config)?;
    println!("plateau rate:  {} iterations, mse {:.8}", report.iterations, report.mse);

    let constant_out = constant_net.evaluate(&stimulus).to_vec();
    let plateau_out = plateau_net.evaluate(&stimulus).to_vec();

    println!();
    println!("unit  desired  constant  plateau");
    for i in 1..desired.len() {
        println!(
            "{:>4}  {:>7.3}  {:>8.3}  {:>7.3}",
            i,
            desired[i],
            round_to(constant_out[i], 1000.0),
            round_to(plateau_out[i], 1000.0),
        );
    }
    Ok(())
}
