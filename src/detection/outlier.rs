//! Rolling mean/standard-deviation outlier detection.
//!
//! A point is an outlier when its value lies strictly outside
//! `[mean - sigma * std, mean + sigma * std]`, where the mean and sample
//! standard deviation come from the trailing window ending at that point.
//! Points without a full window are never classified.

use super::band::{compute_bounds, Band};
use super::config::OutlierConfig;
use super::outcome::{OutlierRecord, Outcome};
use crate::core::{parse_date, DateRange, TimeSeries};
use crate::error::{OutlierError, Result};
use crate::transform::{rolling_mean, rolling_statistics, RollingAlgorithm, RollingStat};

/// Validated detector over an owned snapshot of a series.
///
/// All validation happens in [`OutlierDetector::new`]; every analysis method
/// is infallible and returns the same answer on repeated calls.
#[derive(Debug, Clone)]
pub struct OutlierDetector {
    series: TimeSeries,
    window_size: usize,
    sigma: f64,
    range: DateRange,
    algorithm: RollingAlgorithm,
}

impl OutlierDetector {
    /// Validate `config` against `series` and build a detector.
    ///
    /// # Errors
    /// * [`OutlierError::EmptyData`] if the series has no observations
    /// * [`OutlierError::InvalidParameter`] for a zero window or a
    ///   negative/non-finite sigma
    /// * [`OutlierError::WindowTooLarge`] if the window exceeds the series
    /// * [`OutlierError::InvalidDate`] if a start or end date is malformed
    pub fn new(series: TimeSeries, config: &OutlierConfig) -> Result<Self> {
        if series.is_empty() {
            return Err(OutlierError::EmptyData);
        }

        config.validate()?;

        if config.window_size > series.len() {
            return Err(OutlierError::WindowTooLarge {
                window: config.window_size,
                len: series.len(),
            });
        }

        let start = config.start_date.as_deref().map(parse_date).transpose()?;
        let end = config.end_date.as_deref().map(parse_date).transpose()?;
        let range = DateRange::resolve(start, end, &series)?;

        Ok(Self {
            series,
            window_size: config.window_size,
            sigma: config.sigma,
            range,
            algorithm: config.algorithm,
        })
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Resolved reporting window.
    pub fn date_range(&self) -> DateRange {
        self.range
    }

    /// Rolling mean and sample standard deviation per index.
    pub fn rolling_statistics(&self) -> Vec<Option<RollingStat>> {
        rolling_statistics(self.series.values(), self.window_size, self.algorithm)
    }

    /// Moving-average curve, for plotting alongside the raw series.
    pub fn rolling_mean(&self) -> Vec<Option<f64>> {
        rolling_mean(self.series.values(), self.window_size, self.algorithm)
    }

    /// Expected range per index.
    pub fn bounds(&self) -> Vec<Option<Band>> {
        compute_bounds(&self.rolling_statistics(), self.sigma)
    }

    /// Every outlier in the series, in series order, ignoring the date range.
    pub fn find_outliers(&self) -> Vec<OutlierRecord> {
        self.series
            .iter()
            .zip(self.bounds())
            .filter_map(|(obs, band)| {
                let band = band?;
                band.is_outlier(obs.value).then_some(OutlierRecord {
                    date: obs.date,
                    value: obs.value,
                    lower_bound: band.lower,
                    upper_bound: band.upper,
                })
            })
            .collect()
    }

    /// Outliers restricted to the date range, tagged by the whole series.
    ///
    /// Returns [`Outcome::NoAnomalies`] only when the series has no outliers
    /// at all. If outliers exist but none fall in the date range the result
    /// is an empty [`Outcome::Anomalies`].
    pub fn get_outliers(&self) -> Outcome {
        let outliers = self.find_outliers();
        if outliers.is_empty() {
            return Outcome::NoAnomalies;
        }

        Outcome::Anomalies(
            outliers
                .into_iter()
                .filter(|record| self.range.contains(record.date))
                .collect(),
        )
    }
}

/// Validate inputs and run the full analysis in one call.
///
/// The series is copied; the caller's data is left untouched.
///
/// # Example
/// ```
/// use anofox_outliers::core::TimeSeries;
/// use anofox_outliers::detection::{analyze, OutlierConfig};
///
/// let pairs: Vec<(String, f64)> = (1..=10)
///     .map(|d| (format!("2020-01-{d:02}"), if d == 10 { 100.0 } else { 10.0 }))
///     .collect();
/// let series = TimeSeries::from_str_pairs(&pairs).unwrap();
///
/// let outcome = analyze(&series, &OutlierConfig::new(5, 1.5)).unwrap();
/// assert_eq!(outcome.records().len(), 1);
/// assert_eq!(outcome.records()[0].value, 100.0);
/// ```
pub fn analyze(series: &TimeSeries, config: &OutlierConfig) -> Result<Outcome> {
    Ok(OutlierDetector::new(series.clone(), config)?.get_outliers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Observation;
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDate};

    fn daily(values: &[f64]) -> TimeSeries {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Observation::new(base + Duration::days(i as i64), v))
            .collect()
    }

    fn spike_series() -> TimeSeries {
        let mut values = vec![10.0; 9];
        values.push(100.0);
        daily(&values)
    }

    #[test]
    fn new_rejects_empty_series() {
        let err =
            OutlierDetector::new(TimeSeries::default(), &OutlierConfig::default()).unwrap_err();
        assert_eq!(err, OutlierError::EmptyData);
    }

    #[test]
    fn new_rejects_window_larger_than_series() {
        let err = OutlierDetector::new(daily(&[1.0; 5]), &OutlierConfig::new(10, 1.5)).unwrap_err();
        assert_eq!(err, OutlierError::WindowTooLarge { window: 10, len: 5 });
    }

    #[test]
    fn new_accepts_window_equal_to_length() {
        let detector =
            OutlierDetector::new(daily(&[1.0, 2.0, 3.0]), &OutlierConfig::new(3, 1.0)).unwrap();
        assert_eq!(detector.bounds().iter().filter(|b| b.is_some()).count(), 1);
    }

    #[test]
    fn new_rejects_malformed_dates() {
        let config = OutlierConfig::new(3, 1.5).start_date("2020-02-30");
        let err = OutlierDetector::new(daily(&[1.0; 5]), &config).unwrap_err();
        assert!(matches!(
            err,
            OutlierError::InvalidDate { ref input, .. } if input == "2020-02-30"
        ));

        let config = OutlierConfig::new(3, 1.5).end_date("02/01/2020");
        let err = OutlierDetector::new(daily(&[1.0; 5]), &config).unwrap_err();
        assert!(matches!(err, OutlierError::InvalidDate { .. }));
    }

    #[test]
    fn new_rejects_invalid_parameters() {
        let err = OutlierDetector::new(daily(&[1.0; 5]), &OutlierConfig::new(0, 1.5)).unwrap_err();
        assert!(matches!(err, OutlierError::InvalidParameter(_)));

        let err = OutlierDetector::new(daily(&[1.0; 5]), &OutlierConfig::new(3, -1.0)).unwrap_err();
        assert!(matches!(err, OutlierError::InvalidParameter(_)));
    }

    #[test]
    fn window_of_one_has_no_bands() {
        let series = daily(&[1.0, 2.0, 3.0]);
        let detector = OutlierDetector::new(series.clone(), &OutlierConfig::new(1, 1.5)).unwrap();
        assert!(detector.bounds().iter().all(Option::is_none));
        assert!(detector.find_outliers().is_empty());

        let outcome = analyze(&series, &OutlierConfig::new(1, 1.5)).unwrap();
        assert_eq!(outcome, Outcome::NoAnomalies);
    }

    #[test]
    fn new_resolves_date_range() {
        let detector = OutlierDetector::new(
            spike_series(),
            &OutlierConfig::new(5, 1.5).start_date("2020-01-05"),
        )
        .unwrap();

        let range = detector.date_range();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2020, 1, 10).unwrap());
    }

    #[test]
    fn spike_is_flagged_above_band() {
        let detector = OutlierDetector::new(spike_series(), &OutlierConfig::new(5, 1.5)).unwrap();
        let outliers = detector.find_outliers();

        assert_eq!(outliers.len(), 1);
        let record = outliers[0];
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2020, 1, 10).unwrap());
        assert_eq!(record.value, 100.0);
        // mean 28, sample std sqrt(1620)
        let spread = 1.5 * 1620.0_f64.sqrt();
        assert_relative_eq!(record.lower_bound, 28.0 - spread, epsilon = 1e-9);
        assert_relative_eq!(record.upper_bound, 28.0 + spread, epsilon = 1e-9);
        assert!(record.lower_bound < record.upper_bound);
        assert!(record.value > record.upper_bound);
    }

    #[test]
    fn dip_is_flagged_below_band() {
        let mut values = vec![50.0, 51.0, 49.0, 50.0, 51.0, 49.0, 50.0, 51.0];
        values.push(0.0);
        // A point sits inside its own window, so sigma must stay below 7 / sqrt(8).
        let detector = OutlierDetector::new(daily(&values), &OutlierConfig::new(8, 1.5)).unwrap();
        let outliers = detector.find_outliers();

        assert_eq!(outliers.len(), 1);
        assert_eq!(outliers[0].value, 0.0);
        assert!(outliers[0].value < outliers[0].lower_bound);
        assert!(outliers[0].lower_bound < outliers[0].upper_bound);
    }

    #[test]
    fn warm_up_points_are_never_classified() {
        // The first value is extreme but has no full window behind it.
        let series = daily(&[1000.0, 1.0, 2.0, 1.0, 2.0, 1.0]);
        let detector = OutlierDetector::new(series, &OutlierConfig::new(3, 0.5)).unwrap();
        let bounds = detector.bounds();
        assert!(bounds[0].is_none());
        assert!(bounds[1].is_none());
        assert!(detector
            .find_outliers()
            .iter()
            .all(|r| r.date != NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
    }

    #[test]
    fn get_outliers_clean_series() {
        let detector =
            OutlierDetector::new(daily(&[3.0; 12]), &OutlierConfig::new(4, 1.5)).unwrap();
        assert_eq!(detector.get_outliers(), Outcome::NoAnomalies);
    }

    #[test]
    fn get_outliers_tag_ignores_date_filter() {
        let config = OutlierConfig::new(5, 1.5)
            .start_date("2020-01-01")
            .end_date("2020-01-05");
        let detector = OutlierDetector::new(spike_series(), &config).unwrap();

        assert_eq!(detector.find_outliers().len(), 1);
        assert_eq!(detector.get_outliers(), Outcome::Anomalies(vec![]));
    }

    #[test]
    fn rolling_mean_curve_matches_statistics() {
        for algorithm in [RollingAlgorithm::Incremental, RollingAlgorithm::Recompute] {
            let config = OutlierConfig::new(5, 1.5).algorithm(algorithm);
            let detector = OutlierDetector::new(spike_series(), &config).unwrap();
            let curve = detector.rolling_mean();
            let stats = detector.rolling_statistics();

            for (mean, stat) in curve.iter().zip(&stats) {
                assert_eq!(*mean, stat.map(|s| s.mean));
            }
        }
    }

    #[test]
    fn rolling_mean_curve_follows_configured_algorithm() {
        let values: Vec<f64> = (0..60).map(|i| 0.1 * i as f64 + (i as f64).sin() * 1e3).collect();
        let config = OutlierConfig::new(7, 1.5).algorithm(RollingAlgorithm::Recompute);
        let detector = OutlierDetector::new(daily(&values), &config).unwrap();

        let expected = rolling_mean(&values, 7, RollingAlgorithm::Recompute);
        assert_eq!(detector.rolling_mean(), expected);
    }

    #[test]
    fn algorithms_find_same_outliers() {
        let values: Vec<f64> = (0..120)
            .map(|i| 20.0 + 3.0 * (i as f64 * 0.4).sin() + if i % 29 == 0 { 15.0 } else { 0.0 })
            .collect();
        let series = daily(&values);

        let fast = analyze(&series, &OutlierConfig::new(10, 2.0)).unwrap();
        let slow = analyze(
            &series,
            &OutlierConfig::new(10, 2.0).algorithm(RollingAlgorithm::Recompute),
        )
        .unwrap();

        let dates = |o: &Outcome| o.records().iter().map(|r| r.date).collect::<Vec<_>>();
        assert_eq!(dates(&fast), dates(&slow));
        assert!(!fast.is_clean());
    }

    #[test]
    fn analyze_leaves_input_untouched() {
        let series = spike_series();
        let before = series.clone();
        let _ = analyze(&series, &OutlierConfig::new(5, 1.5)).unwrap();
        assert_eq!(series, before);
    }
}
