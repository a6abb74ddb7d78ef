use super::network::Network;

impl Network {
    /// Output-layer error signal, written into `out`: per unit,
    /// `(desired - obtained) * obtained * (1 - obtained)`, the residual
    /// times the logistic derivative.
    ///
    /// Runs over the full bias-augmented pair; the bias slot's error is
    /// computed like any other and later feeds the bias row of the weight
    /// adjustment.
    pub fn output_error(&self, desired: &[f32], out: &mut [f32]) {
        let obtained = self.output();
        for ((out, d), o) in out.iter_mut().zip(desired).zip(obtained) {
            *out = (d - o) * o * (1.0 - o);
        }
    }

    /// Propagates an error signal backward across transition `i`.
    ///
    /// `next_err` is the error of layer `i + 1`; the result, the error of
    /// layer `i`, is written into `out`. The same row-sum combinator as
    /// the forward pass pushes the error through weight matrix `i` (into
    /// the `propagated` scratch), then each element is scaled by the
    /// derivative taken at the *downstream* activation:
    /// `out[k] = propagated[k] * act[i+1][k] * (1 - act[i+1][k])`.
    ///
    /// Called for `i` from the last transition down to 1; the input layer
    /// receives no error.
    pub fn hidden_error(&self, i: usize, next_err: &[f32], propagated: &mut [f32], out: &mut [f32]) {
        self.weights[i].row_sum_scale(next_err, propagated);
        let downstream = &self.layers[i + 1];
        for ((out, w), a) in out.iter_mut().zip(propagated.iter()).zip(downstream) {
            *out = w * a * (1.0 - a);
        }
    }

    /// Applies the rate-scaled error signals to every weight matrix, last
    /// transition first.
    ///
    /// Row `k` of matrix `i` is shifted uniformly by
    /// `act[i][k] * errors[i][k] * rate`: the whole row moves by one
    /// scalar (a row-broadcast update), there is no per-destination term.
    /// `errors[i]` is the error of transition `i`'s destination layer.
    pub fn adjust_weights(&mut self, errors: &[Vec<f32>], rate: f32) {
        for i in (0..self.weights.len()).rev() {
            let pairs = self.layers[i].iter().zip(errors[i].iter());
            for (row, (a, e)) in self.weights[i].data.iter_mut().zip(pairs) {
                let adjustment = a * e * rate;
                for ele in row.iter_mut() {
                    *ele += adjustment;
                }
            }
        }
    }
}
