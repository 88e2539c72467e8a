//! Calculation logic for the Earnings Estimator.
//!
//! This module contains the pure arithmetic of the estimator: worked hours
//! from a start/end time and break, the read-only forecast over a date range,
//! materialization of a range into shift records, history aggregation and the
//! number formatting shared by the display and the export.

mod format;
mod forecast;
mod history;
mod materialize;
mod worked_hours;

pub use format::{format_fixed, format_money, round_half_up};
pub use forecast::{ForecastResult, calculate_forecast, inclusive_day_count};
pub use history::{HistorySummary, summarize_history};
pub use materialize::materialize_range;
pub use worked_hours::{MINUTES_PER_DAY, calculate_worked_hours};
