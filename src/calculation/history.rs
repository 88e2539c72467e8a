//! History aggregation over stored shift records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::ShiftRecord;

/// Totals across all stored records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Sum of hours across all records.
    pub total_hours: Decimal,
    /// Sum of salary across all records.
    pub total_pay: Decimal,
    /// Number of records summed.
    pub record_count: usize,
    /// Whether the history panel is shown (at least one record exists).
    pub visible: bool,
}

/// Sums hours and pay across the given records.
///
/// # Returns
///
/// The totals, or `ValueTooLarge` if either sum cannot be represented.
pub fn summarize_history<'a, I>(records: I) -> EstimatorResult<HistorySummary>
where
    I: IntoIterator<Item = &'a ShiftRecord>,
{
    let mut total_hours = Decimal::ZERO;
    let mut total_pay = Decimal::ZERO;
    let mut record_count = 0;

    for record in records {
        total_hours = total_hours
            .checked_add(record.hours)
            .ok_or_else(|| EstimatorError::too_large("Total hours"))?;
        total_pay = total_pay
            .checked_add(record.salary)
            .ok_or_else(|| EstimatorError::too_large("Total pay"))?;
        record_count += 1;
    }

    Ok(HistorySummary {
        total_hours,
        total_pay,
        record_count,
        visible: record_count > 0,
    })
}
