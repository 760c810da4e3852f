//! Trailing rolling-window statistics.
//!
//! Each output has one slot per input observation. A slot is `None` until a
//! full window of `window` observations ending at that index is available, and
//! also whenever the window holds a non-finite value.

use serde::{Deserialize, Serialize};

/// How rolling statistics are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollingAlgorithm {
    /// Slide one accumulator along the series, O(n).
    #[default]
    Incremental,
    /// Rebuild the accumulator for every window, O(n * window).
    Recompute,
}

/// Mean and sample standard deviation of one full window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingStat {
    pub mean: f64,
    pub std: f64,
}

/// Running mean and sum of squared deviations supporting removal.
///
/// Uses Welford's update in both directions, so a window of identical values
/// keeps an exact mean and a zero variance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RollingMoments {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RollingMoments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate every value of a slice.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut moments = Self::new();
        for &x in values {
            moments.push(x);
        }
        moments
    }

    /// Add a value.
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Remove a value previously added with [`push`](Self::push).
    pub fn pop(&mut self, x: f64) {
        match self.count {
            0 => {}
            1 => *self = Self::new(),
            n => {
                let remaining = (n - 1) as f64;
                let delta = x - self.mean;
                self.count = n - 1;
                self.mean -= delta / remaining;
                self.m2 -= delta * (x - self.mean);
            }
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the accumulated values, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance (n-1 denominator), `None` with fewer than two values.
    pub fn variance(&self) -> Option<f64> {
        // Removal can leave a tiny negative residue.
        (self.count > 1).then(|| self.m2.max(0.0) / (self.count - 1) as f64)
    }

    /// Sample standard deviation, `None` with fewer than two values.
    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Mean and standard deviation together.
    pub fn stat(&self) -> Option<RollingStat> {
        Some(RollingStat {
            mean: self.mean()?,
            std: self.std_dev()?,
        })
    }
}

/// Compute rolling mean and sample standard deviation.
///
/// # Arguments
/// * `series` - Input values
/// * `window` - Window size; fewer than 2 leaves every slot `None`
/// * `algorithm` - Incremental or per-window recomputation
pub fn rolling_statistics(
    series: &[f64],
    window: usize,
    algorithm: RollingAlgorithm,
) -> Vec<Option<RollingStat>> {
    rolling_apply(series, window, algorithm, RollingMoments::stat)
}

/// Compute the trailing rolling mean (moving average).
pub fn rolling_mean(
    series: &[f64],
    window: usize,
    algorithm: RollingAlgorithm,
) -> Vec<Option<f64>> {
    rolling_apply(series, window, algorithm, RollingMoments::mean)
}

/// Compute the trailing rolling sample standard deviation.
pub fn rolling_std(
    series: &[f64],
    window: usize,
    algorithm: RollingAlgorithm,
) -> Vec<Option<f64>> {
    rolling_apply(series, window, algorithm, RollingMoments::std_dev)
}

fn rolling_apply<T, F>(
    series: &[f64],
    window: usize,
    algorithm: RollingAlgorithm,
    f: F,
) -> Vec<Option<T>>
where
    F: Fn(&RollingMoments) -> Option<T>,
{
    let n = series.len();
    let mut result: Vec<Option<T>> = (0..n).map(|_| None).collect();
    if window == 0 || window > n {
        return result;
    }

    match algorithm {
        RollingAlgorithm::Incremental => {
            let mut moments = RollingMoments::new();
            let mut non_finite = 0usize;
            // Length of the trailing run of identical finite values.
            let mut run = 0usize;

            for i in 0..n {
                if i >= window {
                    let old = series[i - window];
                    if old.is_finite() {
                        moments.pop(old);
                    } else {
                        non_finite -= 1;
                    }
                }

                let x = series[i];
                if x.is_finite() {
                    moments.push(x);
                    run = if i > 0 && series[i - 1] == x { run + 1 } else { 1 };
                } else {
                    non_finite += 1;
                    run = 0;
                }

                // Removals leave rounding residue; a window of one repeated
                // value is rebuilt so its mean is exact and its spread zero.
                if run == window {
                    moments = RollingMoments::from_slice(&series[i + 1 - window..=i]);
                }

                if i + 1 >= window && non_finite == 0 {
                    result[i] = f(&moments);
                }
            }
        }
        RollingAlgorithm::Recompute => {
            for i in (window - 1)..n {
                let segment = &series[i + 1 - window..=i];
                if segment.iter().all(|x| x.is_finite()) {
                    result[i] = f(&RollingMoments::from_slice(segment));
                }
            }
        }
    }

    result
}
