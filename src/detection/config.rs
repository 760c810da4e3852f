//! Configuration for rolling-window outlier detection.

use crate::error::{OutlierError, Result};
use crate::transform::RollingAlgorithm;
use serde::{Deserialize, Serialize};

/// Default window: four weeks of daily observations.
pub const DEFAULT_WINDOW_SIZE: usize = 28;

/// Default band half-width in standard deviations.
pub const DEFAULT_SIGMA: f64 = 1.5;

/// Configuration for outlier detection.
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// # Example
/// ```
/// use anofox_outliers::detection::OutlierConfig;
///
/// let config = OutlierConfig::new(7, 2.0)
///     .start_date("2020-02-01")
///     .end_date("2020-02-29");
/// assert_eq!(config.window_size, 7);
/// assert_eq!(config.start_date.as_deref(), Some("2020-02-01"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// Number of trailing observations in each window, current one included.
    pub window_size: usize,
    /// Multiplier applied to the rolling standard deviation.
    pub sigma: f64,
    /// First reported date (`YYYY-MM-DD`), series start when absent.
    pub start_date: Option<String>,
    /// Last reported date (`YYYY-MM-DD`), series end when absent.
    pub end_date: Option<String>,
    /// Rolling statistics algorithm.
    pub algorithm: RollingAlgorithm,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            sigma: DEFAULT_SIGMA,
            start_date: None,
            end_date: None,
            algorithm: RollingAlgorithm::Incremental,
        }
    }
}

impl OutlierConfig {
    /// Use the given window size and sigma multiplier over the whole series.
    pub fn new(window_size: usize, sigma: f64) -> Self {
        Self {
            window_size,
            sigma,
            ..Self::default()
        }
    }

    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Report only outliers on or after this `YYYY-MM-DD` date.
    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Report only outliers on or before this `YYYY-MM-DD` date.
    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn algorithm(mut self, algorithm: RollingAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Check the scalar parameters, independent of any series.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(OutlierError::InvalidParameter(
                "window_size must be positive, got 0".to_string(),
            ));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(OutlierError::InvalidParameter(format!(
                "sigma must be a finite non-negative number, got {}",
                self.sigma
            )));
        }
        Ok(())
    }
}
