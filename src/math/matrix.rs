use rand::Rng;
use serde::{Serialize, Deserialize};

/// A row-major weight matrix. A network's matrix `i` has one row per unit
/// of layer `i` (bias included) and one column per unit of layer `i + 1`
/// (bias included).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f32>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills every element with `0.4 / d`, `d` uniform over `1..=10`.
    ///
    /// All initial weights are therefore small positives between 0.04
    /// and 0.4. The random source is caller-supplied so construction can
    /// be made deterministic.
    pub fn random(rows: usize, cols: usize, rng: &mut impl Rng) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for row in &mut res.data {
            for ele in row.iter_mut() {
                *ele = 0.4 / rng.gen_range(1..=10) as f32;
            }
        }
        res
    }

    pub fn from_rows(data: Vec<Vec<f32>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data,
        }
    }

    /// The row-sum-then-scale combinator used by both the forward and the
    /// backward pass: `out[k] = (sum of row k) * v[k]`.
    ///
    /// Each output element sees the whole of its row but only the single
    /// element of `v` at its own index; this is not a matrix-vector
    /// product. Iteration stops at the shortest of the three operands, so
    /// trailing elements of `out` keep their previous values.
    pub fn row_sum_scale(&self, v: &[f32], out: &mut [f32]) {
        for ((out, row), x) in out.iter_mut().zip(&self.data).zip(v) {
            *out = row.iter().sum::<f32>() * x;
        }
    }
}
