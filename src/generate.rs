//! Synthetic sample generation.
//!
//! Each value is `((draw / scale) / draw) / 10` in `f64`, evaluated left to
//! right with two independent draws. This is an ad hoc formula rather than a
//! named distribution. Division by zero (a zero `scale` or a zero second draw)
//! follows IEEE semantics and yields infinity or NaN.

use crate::source::RandomSource;

/// Generate `count` values scaled by `scale`.
pub fn generate_samples<S: RandomSource>(count: u64, scale: u64, source: &mut S) -> Vec<f64> {
    (0..count).map(|_| sample_value(scale, source)).collect()
}

/// Compute a single value from two fresh draws.
pub fn sample_value<S: RandomSource>(scale: u64, source: &mut S) -> f64 {
    let numerator = f64::from(source.draw());
    let divisor = f64::from(source.draw());
    numerator / scale as f64 / divisor / 10.0
}
