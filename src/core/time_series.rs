//! TimeSeries data structure for representing dated observations.

use crate::error::{OutlierError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for string dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string.
///
/// # Example
/// ```
/// use anofox_outliers::core::parse_date;
///
/// let date = parse_date("2020-02-29").unwrap();
/// assert_eq!(date.to_string(), "2020-02-29");
/// assert!(parse_date("2019-02-29").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| OutlierError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// A single dated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Build an observation from a `YYYY-MM-DD` date string.
    pub fn parse(date: &str, value: f64) -> Result<Self> {
        Ok(Self::new(parse_date(date)?, value))
    }
}

/// An ordered, immutable univariate time series.
///
/// Observations are kept in the order they were supplied. Chronological order
/// is expected but not enforced: duplicated or out-of-order dates are kept
/// as-is and processed positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from observations.
    pub fn new(observations: Vec<Observation>) -> Self {
        observations.into_iter().collect()
    }

    /// Create a series from parallel date and value vectors.
    pub fn from_parts(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(OutlierError::DimensionMismatch {
                expected: dates.len(),
                got: values.len(),
            });
        }
        Ok(Self { dates, values })
    }

    /// Create a series from `(date string, value)` pairs.
    ///
    /// Fails with [`OutlierError::InvalidDate`] on the first date that does
    /// not parse.
    pub fn from_str_pairs<S: AsRef<str>>(pairs: &[(S, f64)]) -> Result<Self> {
        pairs
            .iter()
            .map(|(date, value)| Observation::parse(date.as_ref(), *value))
            .collect()
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the observation at `index`.
    pub fn get(&self, index: usize) -> Option<Observation> {
        Some(Observation::new(
            *self.dates.get(index)?,
            *self.values.get(index)?,
        ))
    }

    /// Iterate over observations in series order.
    pub fn iter(&self) -> impl Iterator<Item = Observation> + '_ {
        self.dates
            .iter()
            .zip(&self.values)
            .map(|(&date, &value)| Observation::new(date, value))
    }

    /// Earliest date in the series, regardless of position.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.dates.iter().min().copied()
    }

    /// Latest date in the series, regardless of position.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.dates.iter().max().copied()
    }

    /// Check whether dates never decrease from one observation to the next.
    pub fn is_chronological(&self) -> bool {
        self.dates.windows(2).all(|w| w[0] <= w[1])
    }
}

impl FromIterator<Observation> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let (dates, values) = iter.into_iter().map(|o| (o.date, o.value)).unzip();
        Self { dates, values }
    }
}
