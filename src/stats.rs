//! Mean and unbiased variance of a sample sequence.
//!
//! Degenerate inputs are not guarded: an empty sequence gives a NaN mean and
//! fewer than two samples give a NaN variance, so the problem shows up in the
//! output instead of being masked by a made-up value. The one exception is
//! [`overwrite_variance`] on an empty sequence, see there.

/// How squared deviations are combined by [`VarianceMode::variance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VarianceMode {
    /// Sum every squared deviation (the usual sample variance).
    #[default]
    Accumulate,
    /// Keep only the last squared deviation. Reproduces the output of the
    /// older `dist` tool, whose accumulator was overwritten on every step,
    /// including its `0` for an empty sequence.
    Overwrite,
}

impl VarianceMode {
    pub fn variance(self, samples: &[f64], mean: f64) -> f64 {
        match self {
            VarianceMode::Accumulate => unbiased_variance(samples, mean),
            VarianceMode::Overwrite => overwrite_variance(samples, mean),
        }
    }
}

/// The two reported statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Unbiased sample variance around a precomputed `mean`, divided by `n - 1`.
pub fn unbiased_variance(samples: &[f64], mean: f64) -> f64 {
    let sum: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    sum / bessel_denominator(samples.len())
}

/// Squared deviation of the last sample only, divided by `n - 1`.
///
/// `n - 1` wraps for an empty sequence, as the unsigned size arithmetic of
/// the older tool did, so the result is `0 / usize::MAX == 0` rather than NaN.
pub fn overwrite_variance(samples: &[f64], mean: f64) -> f64 {
    let last = samples.last().map_or(0.0, |x| (x - mean).powi(2));
    last / samples.len().wrapping_sub(1) as f64
}

/// Compute the mean, then the variance selected by `mode`.
pub fn summarize(samples: &[f64], mode: VarianceMode) -> Summary {
    let mean = mean(samples);
    Summary {
        mean,
        variance: mode.variance(samples, mean),
    }
}

fn bessel_denominator(len: usize) -> f64 {
    len.saturating_sub(1) as f64
}
