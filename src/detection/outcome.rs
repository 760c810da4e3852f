//! Tagged result of an outlier analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message carried by an analysis that found nothing.
pub const NO_ANOMALIES_MESSAGE: &str = "No anomalies found";

/// A value that fell outside its expected range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierRecord {
    pub date: NaiveDate,
    pub value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl OutlierRecord {
    /// Check if the value lies above the band.
    pub fn is_above(&self) -> bool {
        self.value > self.upper_bound
    }

    /// Distance from the value to the nearest band edge.
    pub fn excess(&self) -> f64 {
        if self.is_above() {
            self.value - self.upper_bound
        } else {
            self.lower_bound - self.value
        }
    }
}

/// Success/failure tag of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// No point in the series is an outlier.
    Success,
    /// At least one point in the series is an outlier.
    Failure,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "Success"),
            Status::Failure => write!(f, "Failure"),
        }
    }
}

/// Result of [`OutlierDetector::get_outliers`](super::OutlierDetector::get_outliers).
///
/// The variant reflects the whole series. The records inside `Anomalies` are
/// restricted to the configured date range and may therefore be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "outliers")]
pub enum Outcome {
    #[serde(rename = "success")]
    NoAnomalies,
    #[serde(rename = "failure")]
    Anomalies(Vec<OutlierRecord>),
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Outcome::NoAnomalies => Status::Success,
            Outcome::Anomalies(_) => Status::Failure,
        }
    }

    /// Check if the series contained no outliers at all.
    pub fn is_clean(&self) -> bool {
        matches!(self, Outcome::NoAnomalies)
    }

    /// Outliers inside the date range, empty for a clean series.
    pub fn records(&self) -> &[OutlierRecord] {
        match self {
            Outcome::NoAnomalies => &[],
            Outcome::Anomalies(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<OutlierRecord> {
        match self {
            Outcome::NoAnomalies => Vec::new(),
            Outcome::Anomalies(records) => records,
        }
    }

    /// Human-readable summary.
    pub fn message(&self) -> String {
        match self {
            Outcome::NoAnomalies => NO_ANOMALIES_MESSAGE.to_string(),
            Outcome::Anomalies(records) => {
                format!("{} anomalies found in date range", records.len())
            }
        }
    }
}
