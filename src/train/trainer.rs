use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::math::scalar::mean_squared_error;
use crate::network::network::Network;
use crate::optim::rate::RateStrategy;
use crate::train::config::TrainConfig;
use crate::train::progress::TrainProgress;

/// Outcome of a converged training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Weight updates performed before convergence.
    pub iterations: usize,
    /// Final mean-squared error, at or below the configured tolerance.
    pub mse: f32,
}

/// Trains `network` on a single stimulus/desired pair until the
/// mean-squared error falls to `config.tolerance`, adjusting every weight
/// matrix once per iteration with the step size `strategy` supplies.
///
/// `desired` pairs element-wise with the bias-augmented output layer, so
/// its length is `network.output_len()` with slot 0 conventionally 0.0.
/// The error is measured over that full pairing, bias slot included.
///
/// On convergence the report carries the iteration count and the final
/// error. If `config.max_iterations` updates are not enough, training
/// stops with [`Error::DidNotConverge`] and the network keeps the
/// weights of the last completed iteration.
pub fn train(
    network: &mut Network,
    stimulus: &[f32],
    desired: &[f32],
    strategy: &mut RateStrategy,
    config: &TrainConfig,
) -> Result<TrainReport> {
    if stimulus.len() != network.input_len() {
        return Err(Error::ShapeMismatch(format!(
            "stimulus length {} does not match the input layer size {}",
            stimulus.len(),
            network.input_len()
        )));
    }
    if desired.len() != network.output_len() {
        return Err(Error::ShapeMismatch(format!(
            "desired length {} does not match the bias-augmented output size {}",
            desired.len(),
            network.output_len()
        )));
    }

    // One error vector per transition, sized like the transition's
    // destination layer. `propagated` is scratch for the weighted
    // error sums before the sigmoid derivative is applied.
    let mut errors: Vec<Vec<f32>> = network.activations()[1..]
        .iter()
        .map(|layer| vec![0.0; layer.len()])
        .collect();
    let mut propagated = errors.clone();

    let mut progress = config.progress.clone();
    let mut iterations = 0;

    network.evaluate(stimulus);
    loop {
        let mse = mean_squared_error(desired, network.output());
        if mse <= config.tolerance {
            debug!("converged after {iterations} iterations, mse {mse}");
            return Ok(TrainReport { iterations, mse });
        }
        if iterations >= config.max_iterations {
            warn!(
                "stopping after {iterations} iterations, mse {mse} still above tolerance {}",
                config.tolerance
            );
            return Err(Error::DidNotConverge { iterations, mse });
        }

        let last = errors.len() - 1;
        network.output_error(desired, &mut errors[last]);
        for i in (1..errors.len()).rev() {
            let (head, tail) = errors.split_at_mut(i);
            network.hidden_error(i, &tail[0], &mut propagated[i], &mut head[i - 1]);
        }

        let rate = strategy.next_rate(mse);
        network.adjust_weights(&errors, rate);
        network.evaluate(stimulus);
        iterations += 1;
        trace!("iteration {iterations}: mse {mse}, rate {rate}");

        if let Some(tx) = &progress {
            let stats = TrainProgress { iteration: iterations, mse, rate };
            if tx.send(stats).is_err() {
                // Receiver gone; keep training, just stop reporting.
                progress = None;
            }
        }
    }
}
