//! Presentation helpers for analysis outcomes.
//!
//! Detection itself never logs; these helpers are for callers that want to
//! print, ship or log a finished [`Outcome`].

use crate::detection::{Outcome, Status};
use crate::error::Result;
use std::fmt::Write;

/// Render an outcome as a fixed-width text table.
///
/// # Example
/// ```
/// use anofox_outliers::detection::Outcome;
/// use anofox_outliers::report::render_table;
///
/// assert_eq!(render_table(&Outcome::NoAnomalies), "Success: No anomalies found\n");
/// ```
pub fn render_table(outcome: &Outcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", outcome.status(), outcome.message());

    if let Outcome::Anomalies(records) = outcome {
        let _ = writeln!(
            out,
            "{:<10} {:>14} {:>14} {:>14}",
            "Date", "Value", "Lower Bound", "Upper Bound"
        );
        let _ = writeln!(out, "{:-<55}", "");
        for r in records {
            let _ = writeln!(
                out,
                "{:<10} {:>14.4} {:>14.4} {:>14.4}",
                r.date.to_string(),
                r.value,
                r.lower_bound,
                r.upper_bound
            );
        }
    }
    out
}

/// Serialize an outcome as JSON.
pub fn to_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Log an outcome as structured `tracing` events.
///
/// A clean series produces one `info` event; otherwise one `warn` event per
/// reported outlier follows a summary event.
pub fn emit(outcome: &Outcome) {
    match outcome.status() {
        Status::Success => tracing::info!(status = %Status::Success, "{}", outcome.message()),
        Status::Failure => {
            let records = outcome.records();
            tracing::warn!(
                status = %Status::Failure,
                count = records.len(),
                "{}",
                outcome.message()
            );
            for r in records {
                tracing::warn!(
                    date = %r.date,
                    value = r.value,
                    lower_bound = r.lower_bound,
                    upper_bound = r.upper_bound,
                    excess = r.excess(),
                    "outlier"
                );
            }
        }
    }
}
