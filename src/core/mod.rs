//! Core data structures for dated time series.

mod date_range;
mod time_series;

pub use date_range::DateRange;
pub use time_series::{parse_date, Observation, TimeSeries, DATE_FORMAT};
