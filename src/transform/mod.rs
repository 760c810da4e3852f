//! Windowed transformations of time series values.

pub mod window;

pub use window::{
    rolling_mean, rolling_statistics, rolling_std, RollingAlgorithm, RollingMoments, RollingStat,
};
