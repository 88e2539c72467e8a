//! Range materialization.
//!
//! Expands a schedule's date range into one concrete shift record per day.

use crate::error::EstimatorResult;
use crate::models::{IdGenerator, ShiftRecord, WorkSchedule};

use super::history::summarize_history;
use super::worked_hours::calculate_worked_hours;

/// Generates the shift records for a schedule.
///
/// Every record gets the same worked hours and rate, with
/// `salary = hours × rate`. An inverted range produces a single record dated
/// at `date_from`; otherwise one record is produced per day from `date_from`
/// to `date_to` inclusive, in date order.
///
/// The caller decides what to do with the records; this function never
/// touches a store.
///
/// # Returns
///
/// The generated records, `NegativeValue` if the break or rate is negative,
/// or `ValueTooLarge` if a salary or the range's total cannot be represented.
///
/// # Examples
///
/// ```
/// use earnings_estimator::calculation::materialize_range;
/// use earnings_estimator::models::{SequentialIds, WorkSchedule};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let schedule = WorkSchedule {
///     date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     date_to: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
///     hourly_rate: Decimal::new(20, 0),
///     break_minutes: 0,
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// };
/// let records = materialize_range(&schedule, &mut SequentialIds::new()).unwrap();
/// assert_eq!(records.len(), 3);
/// ```
pub fn materialize_range(
    schedule: &WorkSchedule,
    ids: &mut dyn IdGenerator,
) -> EstimatorResult<Vec<ShiftRecord>> {
    schedule.validate()?;

    let hours = calculate_worked_hours(
        schedule.start_time,
        schedule.end_time,
        schedule.break_minutes,
    )?;
    let rate = schedule.hourly_rate;

    let records = if schedule.is_inverted() {
        vec![ShiftRecord::new(
            ids.next_id(),
            schedule.date_from,
            hours,
            rate,
        )?]
    } else {
        schedule
            .date_from
            .iter_days()
            .take_while(|date| *date <= schedule.date_to)
            .map(|date| ShiftRecord::new(ids.next_id(), date, hours, rate))
            .collect::<EstimatorResult<Vec<_>>>()?
    };

    summarize_history(&records)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimatorError;
    use crate::models::SequentialIds;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_schedule(from: &str, to: &str) -> WorkSchedule {
        WorkSchedule {
            date_from: make_date(from),
            date_to: make_date(to),
            hourly_rate: dec("20"),
            break_minutes: 30,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_one_record_per_day_in_order() {
        let records =
            materialize_range(&make_schedule("2024-01-01", "2024-01-03"), &mut SequentialIds::new())
                .unwrap();

        let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2024-01-01"),
                make_date("2024-01-02"),
                make_date("2024-01-03")
            ]
        );

        for record in &records {
            assert_eq!(record.hours, dec("7.5"));
            assert_eq!(record.salary, dec("150"));
            assert_eq!(record.rate, Some(dec("20")));
        }
    }

    #[test]
    fn test_same_day_range_produces_one_record() {
        let records =
            materialize_range(&make_schedule("2024-01-01", "2024-01-01"), &mut SequentialIds::new())
                .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, make_date("2024-01-01"));
    }

    #[test]
    fn test_inverted_range_produces_single_record_at_start() {
        let records =
            materialize_range(&make_schedule("2024-01-05", "2024-01-01"), &mut SequentialIds::new())
                .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, make_date("2024-01-05"));
    }

    #[test]
    fn test_ids_are_unique() {
        let records =
            materialize_range(&make_schedule("2024-01-01", "2024-03-31"), &mut SequentialIds::new())
                .unwrap();
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(records.len(), 91);
        assert_eq!(ids.len(), 91);
    }

    #[test]
    fn test_negative_rate_produces_nothing() {
        let mut schedule = make_schedule("2024-01-01", "2024-01-03");
        schedule.hourly_rate = dec("-20");

        let mut ids = SequentialIds::new();
        let result = materialize_range(&schedule, &mut ids);
        assert!(matches!(result, Err(EstimatorError::NegativeValue { .. })));
        assert_eq!(ids.next_id(), "rec-0001");
    }

    #[test]
    fn test_unrepresentable_salary_is_rejected() {
        let mut schedule = make_schedule("2024-01-01", "2024-01-03");
        schedule.hourly_rate = Decimal::MAX;

        let result = materialize_range(&schedule, &mut SequentialIds::new());
        assert!(matches!(result, Err(EstimatorError::ValueTooLarge { .. })));
    }

    #[test]
    fn test_unrepresentable_range_total_is_rejected() {
        // Each day's salary fits but three of them summed do not.
        let mut schedule = make_schedule("2024-01-01", "2024-01-03");
        schedule.hourly_rate = Decimal::MAX / dec("10");

        let result = materialize_range(&schedule, &mut SequentialIds::new());
        assert!(matches!(result, Err(EstimatorError::ValueTooLarge { .. })));
    }
}
