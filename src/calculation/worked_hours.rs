//! Worked hours calculation.
//!
//! Converts a start time, end time and unpaid break into decimal hours. An end
//! time earlier than the start time is read as the next calendar day.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{EstimatorError, EstimatorResult};

/// Minutes in one day, added when a shift wraps past midnight.
pub const MINUTES_PER_DAY: i64 = 1440;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// Calculates the hours worked between two times of day, minus a break.
///
/// The result is clamped at zero, so a break longer than the shift yields
/// zero hours rather than a negative value.
///
/// # Arguments
///
/// * `start` - Shift start time
/// * `end` - Shift end time; earlier than `start` means an overnight shift
/// * `break_minutes` - Unpaid break, must be zero or more
///
/// # Returns
///
/// The worked hours, or `NegativeValue` if `break_minutes` is negative.
///
/// # Examples
///
/// ```
/// use earnings_estimator::calculation::calculate_worked_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(calculate_worked_hours(start, end, 0).unwrap(), Decimal::new(8, 0));
/// ```
pub fn calculate_worked_hours(
    start: NaiveTime,
    end: NaiveTime,
    break_minutes: i64,
) -> EstimatorResult<Decimal> {
    if break_minutes < 0 {
        return Err(EstimatorError::negative(
            "Break time",
            Decimal::from(break_minutes),
        ));
    }

    let mut elapsed_seconds = (end - start).num_seconds();
    if elapsed_seconds < 0 {
        elapsed_seconds += MINUTES_PER_DAY * SECONDS_PER_MINUTE;
    }

    let worked_seconds = (elapsed_seconds - break_minutes * SECONDS_PER_MINUTE).max(0);

    Ok(Decimal::from(worked_seconds) / Decimal::from(SECONDS_PER_HOUR))
}
