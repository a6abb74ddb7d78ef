use rand::Rng;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::math::scalar::logistic;

/// The network state: one bias-augmented activation buffer per layer and
/// one weight matrix per transition between consecutive layers.
///
/// Slot 0 of every buffer is the bias slot. Buffers and the forward-pass
/// scratch vector are allocated once here and rewritten in place by every
/// [`evaluate`](Network::evaluate) call; weights are only ever mutated by
/// weight adjustment during training.
#[derive(Debug)]
pub struct Network {
    pub(crate) topology: Vec<usize>,
    pub(crate) layers: Vec<Vec<f32>>,
    pub(crate) weights: Vec<Matrix>,
    // Intermediate sums for one transition, sized like layer 0.
    pub(crate) scratch: Vec<f32>,
}

impl Network {
    /// Builds a network with randomly initialized weights.
    ///
    /// `topology[i]` is the number of functional units in layer `i`; the
    /// bias unit is added internally. Fails if fewer than two layers are
    /// given or any layer is empty.
    pub fn new(topology: &[usize]) -> Result<Network> {
        Network::with_rng(topology, &mut rand::thread_rng())
    }

    /// Like [`new`](Network::new), but draws the initial weights from a
    /// caller-supplied random source, making construction deterministic
    /// for a seeded generator.
    pub fn with_rng(topology: &[usize], rng: &mut impl Rng) -> Result<Network> {
        validate_topology(topology)?;
        let weights = (0..topology.len() - 1)
            .map(|i| Matrix::random(topology[i] + 1, topology[i + 1] + 1, rng))
            .collect();
        Ok(Network::assemble(topology, weights))
    }

    /// Builds a network from previously obtained weight matrices, for
    /// resuming training or injecting known weights.
    ///
    /// Every matrix must have exactly the shape the topology implies:
    /// `(topology[i] + 1) × (topology[i+1] + 1)`.
    pub fn with_weights(topology: &[usize], weights: Vec<Matrix>) -> Result<Network> {
        validate_topology(topology)?;
        if weights.len() != topology.len() - 1 {
            return Err(Error::ShapeMismatch(format!(
                "expected {} weight matrices for this topology, got {}",
                topology.len() - 1,
                weights.len()
            )));
        }
        for (i, m) in weights.iter().enumerate() {
            let rows = topology[i] + 1;
            let cols = topology[i + 1] + 1;
            let data_ok = m.data.len() == rows && m.data.iter().all(|row| row.len() == cols);
            if m.rows != rows || m.cols != cols || !data_ok {
                return Err(Error::ShapeMismatch(format!(
                    "weight matrix {i} must be {rows}x{cols}, got {}x{}",
                    m.rows, m.cols
                )));
            }
        }
        Ok(Network::assemble(topology, weights))
    }

    fn assemble(topology: &[usize], weights: Vec<Matrix>) -> Network {
        let layers: Vec<Vec<f32>> = topology.iter().map(|&n| vec![0.0; n + 1]).collect();
        let scratch = vec![0.0; layers[0].len()];
        Network {
            topology: topology.to_vec(),
            layers,
            weights,
            scratch,
        }
    }

    /// Runs a forward pass for `stimulus` and returns the output layer.
    ///
    /// The stimulus fills slots `1..` of the input layer. For each
    /// transition the source layer's bias slot is pinned to 1.0, the
    /// row-sum combinator produces the intermediate sums, and the logistic
    /// function writes the next layer index by index. After the last
    /// transition the output layer's slot 0 is cleared to 0.0, since the
    /// bias position is not a real output.
    ///
    /// # Panics
    /// Panics if `stimulus.len() != self.input_len()`.
    pub fn evaluate(&mut self, stimulus: &[f32]) -> &[f32] {
        assert_eq!(
            stimulus.len(),
            self.input_len(),
            "stimulus length must equal the input layer size"
        );
        self.layers[0][1..].copy_from_slice(stimulus);

        for i in 0..self.weights.len() {
            self.layers[i][0] = 1.0;
            self.weights[i].row_sum_scale(&self.layers[i], &mut self.scratch);
            let next = &mut self.layers[i + 1];
            for (unit, z) in next.iter_mut().zip(&self.scratch) {
                *unit = logistic(*z);
            }
        }

        let last = self.layers.len() - 1;
        self.layers[last][0] = 0.0;
        &self.layers[last]
    }

    /// The layer sizes this network was built from (bias units excluded).
    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    /// Number of stimulus elements [`evaluate`](Network::evaluate) expects.
    pub fn input_len(&self) -> usize {
        self.topology[0]
    }

    /// Length of the bias-augmented output layer, `topology[last] + 1`.
    pub fn output_len(&self) -> usize {
        self.topology[self.topology.len() - 1] + 1
    }

    /// The weight matrices, one per layer transition.
    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// The bias-augmented activation buffers, as left by the most recent
    /// forward pass.
    pub fn activations(&self) -> &[Vec<f32>] {
        &self.layers
    }

    /// The output layer as left by the most recent forward pass.
    pub fn output(&self) -> &[f32] {
        &self.layers[self.layers.len() - 1]
    }
}

fn validate_topology(topology: &[usize]) -> Result<()> {
    if topology.len() < 2 {
        return Err(Error::InvalidTopology(format!(
            "need at least an input and an output layer, got {} entries",
            topology.len()
        )));
    }
    if let Some(pos) = topology.iter().position(|&n| n == 0) {
        return Err(Error::InvalidTopology(format!("layer {pos} has zero units")));
    }
    Ok(())
}
