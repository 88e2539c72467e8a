//! Forecast calculation.
//!
//! Projects total earnings for a schedule over a date range without creating
//! any shift records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::WorkSchedule;

use super::format::format_fixed;
use super::worked_hours::calculate_worked_hours;

/// The result of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Number of days the forecast covers.
    pub days: i64,
    /// Worked hours per day.
    pub hours_per_day: Decimal,
    /// The hourly rate used.
    pub rate: Decimal,
    /// `days × hours_per_day × rate`.
    pub total: Decimal,
    /// True when the range was inverted and only the start date was counted.
    pub start_date_only: bool,
    /// Human-readable breakdown, e.g. `3 Days x 8.00h`.
    pub breakdown: String,
}

/// Returns the inclusive number of calendar days from `from` to `to`.
///
/// An inverted range counts as a single day.
///
/// # Examples
///
/// ```
/// use earnings_estimator::calculation::inclusive_day_count;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// assert_eq!(inclusive_day_count(from, to), 3);
/// assert_eq!(inclusive_day_count(to, from), 1);
/// ```
pub fn inclusive_day_count(from: NaiveDate, to: NaiveDate) -> i64 {
    if from > to {
        1
    } else {
        (to - from).num_days() + 1
    }
}

/// Calculates the projected earnings for a schedule.
///
/// # Returns
///
/// The forecast, `NegativeValue` if the break or the rate is negative, or
/// `ValueTooLarge` if the total cannot be represented.
pub fn calculate_forecast(schedule: &WorkSchedule) -> EstimatorResult<ForecastResult> {
    schedule.validate()?;

    let hours_per_day = calculate_worked_hours(
        schedule.start_time,
        schedule.end_time,
        schedule.break_minutes,
    )?;
    let start_date_only = schedule.is_inverted();
    let days = inclusive_day_count(schedule.date_from, schedule.date_to);
    let total = Decimal::from(days)
        .checked_mul(hours_per_day)
        .and_then(|hours| hours.checked_mul(schedule.hourly_rate))
        .ok_or_else(|| EstimatorError::too_large("Hourly rate"))?;

    let breakdown = if start_date_only {
        format!(
            "1 Day (Start date only) x {}h",
            format_fixed(hours_per_day, 2)
        )
    } else {
        format!("{} Days x {}h", days, format_fixed(hours_per_day, 2))
    };

    Ok(ForecastResult {
        days,
        hours_per_day,
        rate: schedule.hourly_rate,
        total,
        start_date_only,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_schedule(from: &str, to: &str, rate: &str, break_minutes: i64) -> WorkSchedule {
        WorkSchedule {
            date_from: make_date(from),
            date_to: make_date(to),
            hourly_rate: dec(rate),
            break_minutes,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_three_day_forecast() {
        let result = calculate_forecast(&make_schedule("2024-01-01", "2024-01-03", "20", 0)).unwrap();

        assert_eq!(result.days, 3);
        assert_eq!(result.hours_per_day, dec("8"));
        assert_eq!(result.total, dec("480"));
        assert!(!result.start_date_only);
        assert_eq!(result.breakdown, "3 Days x 8.00h");
    }

    #[test]
    fn test_same_day_forecast() {
        let result = calculate_forecast(&make_schedule("2024-01-01", "2024-01-01", "25", 30)).unwrap();

        assert_eq!(result.days, 1);
        assert_eq!(result.total, dec("187.5"));
        assert_eq!(result.breakdown, "1 Days x 7.50h");
    }

    #[test]
    fn test_inverted_range_counts_start_date_only() {
        let result = calculate_forecast(&make_schedule("2024-01-05", "2024-01-01", "20", 0)).unwrap();

        assert_eq!(result.days, 1);
        assert!(result.start_date_only);
        assert_eq!(result.total, dec("160"));
        assert_eq!(result.breakdown, "1 Day (Start date only) x 8.00h");
    }

    #[test]
    fn test_range_across_month_boundary() {
        let result = calculate_forecast(&make_schedule("2024-02-27", "2024-03-02", "10", 0)).unwrap();

        // 2024 is a leap year: Feb 27, 28, 29, Mar 1, 2
        assert_eq!(result.days, 5);
        assert_eq!(result.total, dec("400"));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let result = calculate_forecast(&make_schedule("2024-01-01", "2024-01-03", "-1", 0));
        assert!(matches!(result, Err(EstimatorError::NegativeValue { .. })));
    }

    #[test]
    fn test_negative_break_is_rejected() {
        let result = calculate_forecast(&make_schedule("2024-01-01", "2024-01-03", "20", -30));
        assert!(matches!(result, Err(EstimatorError::NegativeValue { .. })));
    }

    #[test]
    fn test_unrepresentable_total_is_rejected() {
        let mut schedule = make_schedule("2024-01-01", "2024-01-02", "0", 0);
        schedule.hourly_rate = Decimal::MAX;

        match calculate_forecast(&schedule) {
            Err(EstimatorError::ValueTooLarge { field }) => assert_eq!(field, "Hourly rate"),
            other => panic!("Expected ValueTooLarge error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_gives_zero_total() {
        let result = calculate_forecast(&make_schedule("2024-01-01", "2024-01-07", "0", 0)).unwrap();
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.days, 7);
    }
}
