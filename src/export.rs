//! Delimited-text export of shift records.
//!
//! Records are rendered as comma-separated rows sorted by date, followed by a
//! totals row, and handed to an [`ExportSink`] such as a clipboard.

use rust_decimal::Decimal;

use crate::calculation::{format_fixed, round_half_up};
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::ShiftRecord;

/// Header row of the export.
pub const EXPORT_HEADER: &str = "Date,Hours,Pay";

/// Accepts exported text, e.g. a system clipboard.
pub trait ExportSink {
    /// Takes ownership of the exported text.
    ///
    /// Implementations report failure with [`EstimatorError::ExportFailed`].
    fn accept(&mut self, text: &str) -> EstimatorResult<()>;
}

/// An in-memory clipboard holding the last exported text.
#[derive(Debug, Clone, Default)]
pub struct ClipboardBuffer {
    contents: Option<String>,
}

impl ClipboardBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last accepted text, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Removes and returns the last accepted text.
    pub fn take(&mut self) -> Option<String> {
        self.contents.take()
    }
}

impl ExportSink for ClipboardBuffer {
    fn accept(&mut self, text: &str) -> EstimatorResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Renders records as delimited text.
///
/// Rows are sorted by ascending date regardless of storage order. Hours and
/// pay are written with two decimals and pay carries `currency_symbol`. The
/// totals row follows a blank line and sums the rows as displayed.
///
/// # Returns
///
/// The export text, `NoRecords` when there is nothing to export, or
/// `ValueTooLarge` when a total cannot be represented.
///
/// # Examples
///
/// ```
/// use earnings_estimator::export::render_export;
/// use earnings_estimator::models::ShiftRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![ShiftRecord::new(
///     "rec-0001".to_string(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     Decimal::new(8, 0),
///     Decimal::new(20, 0),
/// )
/// .unwrap()];
/// let text = render_export(&records, "$").unwrap();
/// assert_eq!(text, "Date,Hours,Pay\n2024-01-01,8.00,$160.00\n\nTotal,8.00,$160.00");
/// ```
pub fn render_export(records: &[ShiftRecord], currency_symbol: &str) -> EstimatorResult<String> {
    if records.is_empty() {
        return Err(EstimatorError::NoRecords {
            action: "copy".to_string(),
        });
    }

    let mut sorted: Vec<&ShiftRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    let mut text = String::from(EXPORT_HEADER);
    text.push('\n');

    let mut total_hours = Decimal::ZERO;
    let mut total_pay = Decimal::ZERO;

    for record in sorted {
        let hours = round_half_up(record.hours, 2);
        let pay = round_half_up(record.salary, 2);
        text.push_str(&format!(
            "{},{},{}{}\n",
            record.date.format("%Y-%m-%d"),
            format_fixed(hours, 2),
            currency_symbol,
            format_fixed(pay, 2)
        ));
        total_hours = total_hours
            .checked_add(hours)
            .ok_or_else(|| EstimatorError::too_large("Total hours"))?;
        total_pay = total_pay
            .checked_add(pay)
            .ok_or_else(|| EstimatorError::too_large("Total pay"))?;
    }

    text.push_str(&format!(
        "\nTotal,{},{}{}",
        format_fixed(total_hours, 2),
        currency_symbol,
        format_fixed(total_pay, 2)
    ));

    Ok(text)
}
