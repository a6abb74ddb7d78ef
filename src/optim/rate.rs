use serde::{Serialize, Deserialize};

use crate::math::scalar::round_to;

/// Precision at which the plateau strategy compares successive errors.
const PLATEAU_PRECISION: f32 = 1_000_000.0;

/// How the training loop turns the current error into a step size.
///
/// Selected by the caller per training run. `Constant` always steps by
/// the configured rate. `Plateau` adapts: the base rate is
/// `1 / |ln(err)|`, guarded to 1.0 at exactly 0.0 and 1.0 where the
/// logarithm is unusable, and is amplified by `|ln(stalls)|` once the
/// rounded error has failed to improve three calls in a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RateStrategy {
    Constant { rate: f32 },
    Plateau { prev_err: f32, stalls: u32 },
}

impl RateStrategy {
    /// A fixed step size for every iteration.
    pub fn constant(rate: f32) -> RateStrategy {
        RateStrategy::Constant { rate }
    }

    /// The adaptive plateau strategy. Starts with no recorded error, so
    /// the first observed error always registers as an improvement.
    pub fn plateau() -> RateStrategy {
        RateStrategy::Plateau {
            prev_err: f32::INFINITY,
            stalls: 0,
        }
    }

    /// The step size for the current error. The training loop calls this
    /// exactly once per iteration; the plateau variant updates its
    /// history here.
    pub fn next_rate(&mut self, err: f32) -> f32 {
        match self {
            RateStrategy::Constant { rate } => *rate,
            RateStrategy::Plateau { prev_err, stalls } => {
                let factor = plateau_factor(err, prev_err, stalls);
                let base = if err == 0.0 || err == 1.0 {
                    1.0
                } else {
                    1.0 / err.ln().abs()
                };
                base * factor
            }
        }
    }
}

/// Rounds the error at 1e6 and compares it against the best value seen so
/// far. Unchanged-or-worse increments the stall counter and, from the
/// third stall on, amplifies the rate by `|ln(stalls)|`; an improvement
/// records the new value and resets the counter.
fn plateau_factor(err: f32, prev_err: &mut f32, stalls: &mut u32) -> f32 {
    let rounded = round_to(err, PLATEAU_PRECISION);
    if rounded >= *prev_err {
        *stalls += 1;
        if *stalls < 3 {
            1.0
        } else {
            (*stalls as f32).ln().abs()
        }
    } else {
        *prev_err = rounded;
        *stalls = 0;
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn stalls_of(strategy: &RateStrategy) -> u32 {
        match strategy {
            RateStrategy::Constant { .. } => 0,
            RateStrategy::Plateau { stalls, .. } => *stalls,
        }
    }

    #[test]
    fn constant_ignores_the_error() {
        let mut rate = RateStrategy::constant(0.25);
        for err in [0.9, 0.5, 0.1, 0.0, 1.0] {
            assert_eq!(rate.next_rate(err), 0.25);
        }
    }

    #[test]
    fn base_rate_is_the_inverse_log_of_the_error() {
        let mut rate = RateStrategy::plateau();
        let err = (-2.0_f32).exp();
        assert_abs_diff_eq!(rate.next_rate(err), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn base_rate_guards_the_logistic_bounds() {
        assert_eq!(RateStrategy::plateau().next_rate(0.0), 1.0);
        assert_eq!(RateStrategy::plateau().next_rate(1.0), 1.0);
    }

    #[test]
    fn strictly_decreasing_errors_never_stall() {
        let mut rate = RateStrategy::plateau();
        for err in [0.5, 0.4, 0.3, 0.2, 0.1] {
            rate.next_rate(err);
            assert_eq!(stalls_of(&rate), 0);
        }
    }

    #[test]
    fn unchanging_error_stalls_and_amplifies() {
        let mut rate = RateStrategy::plateau();
        let first = rate.next_rate(0.3);
        let mut last = first;
        for _ in 0..4 {
            last = rate.next_rate(0.3);
        }
        assert!(stalls_of(&rate) >= 3, "stalls = {}", stalls_of(&rate));
        // By the fifth call the multiplier is |ln(4)| > 1.
        assert!(last > first, "rate did not amplify: {last} <= {first}");
        assert_abs_diff_eq!(last, first * 4.0_f32.ln(), epsilon = 1e-4);
    }

    #[test]
    fn worse_error_counts_as_a_stall() {
        let mut rate = RateStrategy::plateau();
        rate.next_rate(0.2);
        rate.next_rate(0.3);
        assert_eq!(stalls_of(&rate), 1);
    }

    #[test]
    fn improvement_resets_the_counter() {
        let mut rate = RateStrategy::plateau();
        rate.next_rate(0.3);
        rate.next_rate(0.3);
        rate.next_rate(0.3);
        assert_eq!(stalls_of(&rate), 2);
        rate.next_rate(0.2);
        assert_eq!(stalls_of(&rate), 0);
        // The recorded best is now 0.2, so 0.25 is a regression.
        rate.next_rate(0.25);
        assert_eq!(stalls_of(&rate), 1);
    }
}
