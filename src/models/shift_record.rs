//! Shift record model.
//!
//! A shift record is one persisted entry of hours and pay for a single date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EstimatorError, EstimatorResult};

/// One unit of logged work.
///
/// `salary` is independently editable from `hours`; the two are only tied
/// together when hours are edited, which recomputes salary from `rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier, stable for the record's lifetime.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// The calendar date this shift applies to.
    pub date: NaiveDate,
    /// Decimal hours worked.
    pub hours: Decimal,
    /// Amount earned for this record.
    pub salary: Decimal,
    /// Hourly rate in effect when the record was created.
    #[serde(default)]
    pub rate: Option<Decimal>,
}

impl ShiftRecord {
    /// Creates a record whose salary is `hours × rate`.
    ///
    /// Returns `ValueTooLarge` if the salary cannot be represented.
    ///
    /// # Examples
    ///
    /// ```
    /// use earnings_estimator::models::ShiftRecord;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = ShiftRecord::new(
    ///     "rec-0001".to_string(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     Decimal::new(8, 0),
    ///     Decimal::new(20, 0),
    /// )?;
    /// assert_eq!(record.salary, Decimal::new(160, 0));
    /// # Ok::<(), earnings_estimator::error::EstimatorError>(())
    /// ```
    pub fn new(id: String, date: NaiveDate, hours: Decimal, rate: Decimal) -> EstimatorResult<Self> {
        let salary = hours
            .checked_mul(rate)
            .ok_or_else(|| EstimatorError::too_large("Salary"))?;

        Ok(Self {
            id,
            date,
            hours,
            salary,
            rate: Some(rate),
        })
    }
}

/// Accepts both string ids and the numeric ids written by older versions of
/// the log.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
