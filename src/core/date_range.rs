//! Inclusive date window used to restrict reported outliers.

use super::time_series::{parse_date, TimeSeries};
use crate::error::{OutlierError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive `[start, end]` date window.
///
/// An inverted window (`start > end`) is allowed and contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Resolve optional bounds against a series.
    ///
    /// A missing start falls back to the earliest date of the series and a
    /// missing end to the latest one.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        series: &TimeSeries,
    ) -> Result<Self> {
        let (first, last) = match (series.min_date(), series.max_date()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(OutlierError::EmptyData),
        };

        let range = match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (Some(start), None) => Self::new(start, last),
            (None, Some(end)) => Self::new(first, end),
            (None, None) => Self::new(first, last),
        };
        Ok(range)
    }

    /// Resolve optional `YYYY-MM-DD` bounds against a series.
    pub fn resolve_str(
        start: Option<&str>,
        end: Option<&str>,
        series: &TimeSeries,
    ) -> Result<Self> {
        let start = start.map(parse_date).transpose()?;
        let end = end.map(parse_date).transpose()?;
        Self::resolve(start, end, series)
    }

    /// Check whether `date` lies inside the window, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series() -> TimeSeries {
        TimeSeries::from_str_pairs(&[
            ("2020-01-10", 1.0),
            ("2020-02-10", 2.0),
            ("2020-03-10", 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn resolve_uses_both_bounds_when_given() {
        let range =
            DateRange::resolve(Some(date(2020, 2, 1)), Some(date(2020, 2, 28)), &series()).unwrap();
        assert_eq!(range, DateRange::new(date(2020, 2, 1), date(2020, 2, 28)));
    }

    #[test]
    fn resolve_only_start_defaults_end_to_series_max() {
        let range = DateRange::resolve(Some(date(2020, 2, 1)), None, &series()).unwrap();
        assert_eq!(range, DateRange::new(date(2020, 2, 1), date(2020, 3, 10)));
    }

    #[test]
    fn resolve_only_end_defaults_start_to_series_min() {
        let range = DateRange::resolve(None, Some(date(2020, 2, 1)), &series()).unwrap();
        assert_eq!(range, DateRange::new(date(2020, 1, 10), date(2020, 2, 1)));
    }

    #[test]
    fn resolve_without_bounds_covers_series() {
        let range = DateRange::resolve(None, None, &series()).unwrap();
        assert_eq!(range, DateRange::new(date(2020, 1, 10), date(2020, 3, 10)));
    }

    #[test]
    fn resolve_empty_series_fails() {
        let err = DateRange::resolve(None, None, &TimeSeries::default()).unwrap_err();
        assert_eq!(err, OutlierError::EmptyData);
    }

    #[test]
    fn resolve_str_parses_bounds() {
        let range = DateRange::resolve_str(Some("2020-02-01"), None, &series()).unwrap();
        assert_eq!(range.start, date(2020, 2, 1));

        let err = DateRange::resolve_str(None, Some("2020-02-31"), &series()).unwrap_err();
        assert!(matches!(err, OutlierError::InvalidDate { .. }));
    }

    #[test]
    fn contains_is_inclusive() {
        let range = DateRange::new(date(2020, 2, 1), date(2020, 2, 29));
        assert!(range.contains(date(2020, 2, 1)));
        assert!(range.contains(date(2020, 2, 29)));
        assert!(!range.contains(date(2020, 3, 1)));
        assert!(!range.contains(date(2020, 1, 31)));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = DateRange::new(date(2020, 3, 1), date(2020, 2, 1));
        assert!(!range.contains(date(2020, 2, 15)));
    }
}
