//! Outlier detection for dated time series.
//!
//! The pipeline is rolling mean → rolling standard deviation → band →
//! point-wise classification → date-range filter.

mod band;
mod config;
mod outcome;
mod outlier;

pub use band::{compute_bounds, Band};
pub use config::{OutlierConfig, DEFAULT_SIGMA, DEFAULT_WINDOW_SIZE};
pub use outcome::{OutlierRecord, Outcome, Status, NO_ANOMALIES_MESSAGE};
pub use outlier::{analyze, OutlierDetector};
pub use crate::transform::RollingAlgorithm;
