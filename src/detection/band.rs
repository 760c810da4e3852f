//! Expected-range bands derived from rolling statistics.

use crate::transform::RollingStat;
use serde::{Deserialize, Serialize};

/// Expected range `[lower, upper]` at one index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    /// Band of `sigma` standard deviations around the window mean.
    pub fn from_stat(stat: RollingStat, sigma: f64) -> Self {
        Self {
            lower: stat.mean - sigma * stat.std,
            upper: stat.mean + sigma * stat.std,
        }
    }

    /// Check whether `value` falls strictly outside the band.
    ///
    /// Values on either edge are inside. NaN is never an outlier.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Compute a band for every index with defined statistics.
pub fn compute_bounds(stats: &[Option<RollingStat>], sigma: f64) -> Vec<Option<Band>> {
    stats
        .iter()
        .map(|stat| stat.map(|s| Band::from_stat(s, sigma)))
        .collect()
}
