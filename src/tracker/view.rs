//! Rendering of the session state into display values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    HistorySummary, calculate_forecast, format_fixed, format_money, summarize_history,
};
use crate::models::{DisplayMode, ShiftRecord, WorkSchedule};

/// One editable row of the history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    /// Record id.
    pub id: String,
    /// Date as `YYYY-MM-DD`.
    pub date: String,
    /// Hours with two decimals.
    pub hours: String,
    /// Salary with two decimals.
    pub salary: String,
}

/// Everything the user interface shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// The active display mode.
    pub mode: DisplayMode,
    /// Results card label.
    pub label: String,
    /// Formatted headline amount.
    pub main_total: String,
    /// Breakdown under the headline amount.
    pub sub_detail: String,
    /// History rows sorted by date.
    pub rows: Vec<HistoryRow>,
    /// Whether the history panel is shown.
    pub history_visible: bool,
    /// Raw history totals.
    pub history: HistorySummary,
}

/// Renders the session state.
///
/// In forecast mode the headline is the forecast for `schedule`; in history
/// mode it is the total pay of `records`. Rows are always listed, sorted by
/// date, without reordering `records` itself.
///
/// Totals that cannot be represented render as zero, with the reason in the
/// detail line.
pub fn render(
    records: &[ShiftRecord],
    mode: DisplayMode,
    schedule: &WorkSchedule,
    currency_symbol: &str,
) -> View {
    let (history, history_error) = match summarize_history(records) {
        Ok(history) => (history, None),
        Err(err) => (
            HistorySummary {
                total_hours: Decimal::ZERO,
                total_pay: Decimal::ZERO,
                record_count: records.len(),
                visible: !records.is_empty(),
            },
            Some(err.user_message()),
        ),
    };

    let (label, main_total, sub_detail) = match mode {
        DisplayMode::Forecast => {
            let (total, detail) = match calculate_forecast(schedule) {
                Ok(forecast) => (forecast.total, forecast.breakdown),
                Err(err) => (Decimal::ZERO, err.user_message()),
            };
            (
                "Estimated Earnings".to_string(),
                format_money(total, currency_symbol),
                detail,
            )
        }
        DisplayMode::History => (
            "Total Earned (History)".to_string(),
            format_money(history.total_pay, currency_symbol),
            history_error.unwrap_or_else(|| {
                format!("Total Worked: {} Hours", format_fixed(history.total_hours, 2))
            }),
        ),
    };

    let mut sorted: Vec<&ShiftRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);
    let rows = sorted
        .into_iter()
        .map(|record| HistoryRow {
            id: record.id.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            hours: format_fixed(record.hours, 2),
            salary: format_fixed(record.salary, 2),
        })
        .collect();

    View {
        mode,
        label,
        main_total,
        sub_detail,
        rows,
        history_visible: history.visible,
        history,
    }
}
