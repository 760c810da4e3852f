//! # anofox-outliers
//!
//! Outlier detection for univariate, dated time series using a rolling
//! mean/standard-deviation envelope.
//!
//! For every observation with a full trailing window the detector derives an
//! expected range `mean ± sigma * std` and reports the observations that fall
//! outside it, optionally restricted to a date window.
//!
//! ```
//! use anofox_outliers::prelude::*;
//!
//! let series = TimeSeries::from_str_pairs(&[
//!     ("2020-01-01", 10.0),
//!     ("2020-01-02", 11.0),
//!     ("2020-01-03", 10.0),
//!     ("2020-01-04", 11.0),
//!     ("2020-01-05", 40.0),
//! ])
//! .unwrap();
//!
//! let outcome = analyze(&series, &OutlierConfig::new(4, 1.0)).unwrap();
//! assert_eq!(outcome.status(), Status::Failure);
//! assert_eq!(outcome.records()[0].value, 40.0);
//! ```

pub mod core;
pub mod detection;
pub mod error;
pub mod report;
pub mod transform;

pub use error::{OutlierError, Result};

pub mod prelude {
    pub use crate::core::{Observation, TimeSeries};
    pub use crate::detection::{
        analyze, OutlierConfig, OutlierDetector, OutlierRecord, Outcome, Status,
    };
    pub use crate::error::{OutlierError, Result};
}
