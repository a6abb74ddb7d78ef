/// The logistic squashing function `1 / (1 + e^-x)`.
pub fn logistic(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Rounds `x` at the given precision, halves away from zero.
///
/// `round_to(0.1234, 100.0)` is `0.12`; `round_to(-0.125, 100.0)` is `-0.13`.
/// The plateau learning-rate strategy compares errors rounded at 1e6.
pub fn round_to(x: f32, precision: f32) -> f32 {
    (x * precision + if x < 0.0 { -0.5 } else { 0.5 }).floor() / precision
}

/// Scalar MSE: mean((desired - obtained)²), averaged over `desired`'s length.
///
/// Both vectors are bias-augmented and the bias slot participates like any
/// other element.
pub fn mean_squared_error(desired: &[f32], obtained: &[f32]) -> f32 {
    let n = desired.len() as f32;
    desired.iter().zip(obtained.iter())
        .map(|(d, o)| (d - o).powi(2))
        .sum::<f32>() / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn logistic_midpoint_and_symmetry() {
        assert_abs_diff_eq!(logistic(0.0), 0.5);
        assert_abs_diff_eq!(logistic(2.0), 1.0 - logistic(-2.0), epsilon = 1e-6);
        assert!(logistic(20.0) > 0.999_999);
        assert!(logistic(-20.0) < 1e-6);
    }

    #[test]
    fn round_to_halves_away_from_zero() {
        assert_abs_diff_eq!(round_to(0.5, 1.0), 1.0);
        assert_abs_diff_eq!(round_to(-0.5, 1.0), -1.0);
        assert_abs_diff_eq!(round_to(0.123_456, 100.0), 0.12);
        assert_abs_diff_eq!(round_to(-0.125, 100.0), -0.13);
    }

    #[test]
    fn round_to_plateau_precision() {
        let a = round_to(0.123_456_2, 1_000_000.0);
        let b = round_to(0.123_456_4, 1_000_000.0);
        assert_abs_diff_eq!(a, b);
        assert!(round_to(0.123_457_1, 1_000_000.0) > a);
    }

    #[test]
    fn mse_zero_iff_equal() {
        let v = [0.0, 0.25, 0.5, 1.0];
        assert_eq!(mean_squared_error(&v, &v), 0.0);
        let w = [0.0, 0.25, 0.5, 0.75];
        assert!(mean_squared_error(&v, &w) > 0.0);
    }

    #[test]
    fn mse_known_value() {
        let desired = [0.0, 1.0];
        let obtained = [0.0, 0.5];
        assert_abs_diff_eq!(mean_squared_error(&desired, &obtained), 0.125);
    }

    #[test]
    fn mse_averages_over_desired_length() {
        // The bias slot counts toward the average like any other element.
        let desired = [0.0, 1.0, 1.0];
        let obtained = [0.0, 0.0, 0.0];
        assert_abs_diff_eq!(mean_squared_error(&desired, &obtained), 2.0 / 3.0);
    }
}
