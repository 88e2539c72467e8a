//! The tracker session and its operations.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::{
    ForecastResult, calculate_forecast, materialize_range, summarize_history,
};
use crate::config::EstimatorConfig;
use crate::error::{EstimatorError, EstimatorResult};
use crate::export::{ExportSink, render_export};
use crate::models::{
    DEFAULT_DISMISS_AFTER_MS, DisplayMode, IdGenerator, Notification, ShiftRecord, WorkSchedule,
};
use crate::store::{KeyValueStore, RecordStore};

use super::confirm::{Confirm, DELETE_ALL_PROMPT, DELETE_ONE_PROMPT};
use super::view::{View, render};

/// The editable fields of a shift record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    /// The record date.
    Date,
    /// The worked hours; editing recomputes salary.
    Hours,
    /// The salary; editing leaves hours alone.
    Salary,
}

impl FromStr for RecordField {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "hours" => Ok(Self::Hours),
            "salary" => Ok(Self::Salary),
            other => Err(EstimatorError::InvalidField {
                field: other.to_string(),
            }),
        }
    }
}

/// The result of a completed operation: the refreshed view and, when the
/// operation has something to say, a notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// The view after the operation.
    pub view: View,
    /// Message for the notification surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

/// The estimator session: records, display mode and current schedule.
///
/// Operations that are rejected return an error and leave the session
/// untouched. Operations that change records persist them before returning;
/// a failed write is reported through the outcome's notification while the
/// in-memory records stay authoritative.
pub struct Tracker {
    store: RecordStore,
    ids: Box<dyn IdGenerator>,
    mode: DisplayMode,
    schedule: WorkSchedule,
    currency_symbol: String,
    dismiss_after_ms: u64,
}

impl Tracker {
    /// Creates a session over an opened record store.
    ///
    /// The session starts in history mode if the store already holds records,
    /// and in forecast mode otherwise.
    pub fn new(store: RecordStore, ids: Box<dyn IdGenerator>, schedule: WorkSchedule) -> Self {
        let mode = if store.is_empty() {
            DisplayMode::Forecast
        } else {
            DisplayMode::History
        };

        Self {
            store,
            ids,
            mode,
            schedule,
            currency_symbol: "$".to_string(),
            dismiss_after_ms: DEFAULT_DISMISS_AFTER_MS,
        }
    }

    /// Creates a session from configuration, with both schedule dates set to
    /// `today`.
    pub fn from_config(
        config: &EstimatorConfig,
        backend: Box<dyn KeyValueStore>,
        ids: Box<dyn IdGenerator>,
        today: NaiveDate,
    ) -> Self {
        let store = RecordStore::open(backend, config.storage.slot.clone());
        let schedule = config.defaults.schedule_for(today);

        let mut tracker = Self::new(store, ids, schedule);
        tracker.currency_symbol = config.display.currency_symbol.clone();
        tracker.dismiss_after_ms = config.notifications.dismiss_after_ms;
        tracker
    }

    /// Returns the active display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns the current schedule.
    pub fn schedule(&self) -> &WorkSchedule {
        &self.schedule
    }

    /// Returns the records in storage order.
    pub fn records(&self) -> &[ShiftRecord] {
        self.store.records()
    }

    /// Renders the current state.
    pub fn view(&self) -> View {
        render(
            self.store.records(),
            self.mode,
            &self.schedule,
            &self.currency_symbol,
        )
    }

    /// Builds the notification reporting `error`.
    pub fn notification_for(&self, error: &EstimatorError) -> Notification {
        Notification::from(error).dismiss_after(self.dismiss_after_ms)
    }

    /// Switches the display mode without touching any records.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Outcome {
        self.mode = mode;
        Outcome {
            view: self.view(),
            notification: None,
        }
    }

    /// Forecasts earnings for `schedule`, which becomes the current schedule.
    ///
    /// The display switches to forecast mode. Records are never touched.
    pub fn forecast(&mut self, schedule: WorkSchedule) -> EstimatorResult<(ForecastResult, View)> {
        let forecast = calculate_forecast(&schedule).inspect_err(|err| {
            warn!(error = %err, "Rejected forecast input");
        })?;

        self.schedule = schedule;
        self.mode = DisplayMode::Forecast;
        Ok((forecast, self.view()))
    }

    /// Replaces every record with one record per day of `schedule`'s range.
    ///
    /// The display switches to history mode.
    pub fn generate_range(&mut self, schedule: WorkSchedule) -> EstimatorResult<Outcome> {
        let records = materialize_range(&schedule, self.ids.as_mut()).inspect_err(|err| {
            warn!(error = %err, "Rejected range input");
        })?;

        info!(
            from = %schedule.date_from,
            to = %schedule.date_to,
            replaced = self.store.len(),
            generated = records.len(),
            "Materialized date range"
        );

        self.store.replace_all(records);
        self.schedule = schedule;
        self.mode = DisplayMode::History;
        Ok(self.commit(None))
    }

    /// Applies a text edit to one field of a record.
    pub fn edit_record(
        &mut self,
        id: &str,
        field: RecordField,
        value: &str,
    ) -> EstimatorResult<Outcome> {
        match field {
            RecordField::Date => self.edit_date(id, value),
            RecordField::Hours => self.edit_hours(id, value),
            RecordField::Salary => self.edit_salary(id, value),
        }
    }

    /// Sets a record's date from `YYYY-MM-DD` text.
    pub fn edit_date(&mut self, id: &str, value: &str) -> EstimatorResult<Outcome> {
        let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| EstimatorError::InvalidDate {
                input: value.to_string(),
            })
            .inspect_err(|err| warn!(record_id = %id, error = %err, "Rejected date edit"))?;

        self.store.get_mut(id)?.date = date;

        info!(record_id = %id, date = %date, "Edited record date");
        Ok(self.commit(None))
    }

    /// Sets a record's hours and recomputes its salary.
    ///
    /// Salary becomes `hours × rate` using the record's own rate, or the
    /// current schedule's rate for records stored without one.
    pub fn edit_hours(&mut self, id: &str, value: &str) -> EstimatorResult<Outcome> {
        let hours = parse_non_negative("Hours", value)
            .inspect_err(|err| warn!(record_id = %id, error = %err, "Rejected hours edit"))?;

        let mut edited = self.store.get(id)?.clone();
        let rate = edited.rate.unwrap_or(self.schedule.hourly_rate);
        let salary = hours
            .checked_mul(rate)
            .ok_or_else(|| EstimatorError::too_large("Hours"))
            .inspect_err(|err| warn!(record_id = %id, error = %err, "Rejected hours edit"))?;
        edited.hours = hours;
        edited.salary = salary;

        let outcome = self.replace_record(edited)?;
        info!(record_id = %id, hours = %hours, salary = %salary, "Edited record hours");
        Ok(outcome)
    }

    /// Sets a record's salary. Hours are left as they are.
    pub fn edit_salary(&mut self, id: &str, value: &str) -> EstimatorResult<Outcome> {
        let salary = parse_non_negative("Salary", value)
            .inspect_err(|err| warn!(record_id = %id, error = %err, "Rejected salary edit"))?;

        let mut edited = self.store.get(id)?.clone();
        edited.salary = salary;

        let outcome = self.replace_record(edited)?;
        info!(record_id = %id, salary = %salary, "Edited record salary");
        Ok(outcome)
    }

    /// Deletes one record if the user confirms.
    ///
    /// Removing the last record switches the display to forecast mode. A
    /// declined confirmation changes nothing.
    pub fn delete_record(&mut self, id: &str, confirm: &dyn Confirm) -> EstimatorResult<Outcome> {
        self.store.get(id)?;

        if !confirm.confirm(DELETE_ONE_PROMPT) {
            return Ok(self.unchanged());
        }

        self.store.remove(id)?;
        if self.store.is_empty() {
            self.mode = DisplayMode::Forecast;
        }

        info!(record_id = %id, remaining = self.store.len(), "Deleted record");
        Ok(self.commit(Some("Record deleted")))
    }

    /// Deletes every record if the user confirms, returning to forecast mode.
    pub fn clear_all(&mut self, confirm: &dyn Confirm) -> EstimatorResult<Outcome> {
        if self.store.is_empty() {
            return Err(EstimatorError::NoRecords {
                action: "clear".to_string(),
            });
        }

        if !confirm.confirm(DELETE_ALL_PROMPT) {
            return Ok(self.unchanged());
        }

        let cleared = self.store.len();
        self.store.clear();
        self.mode = DisplayMode::Forecast;

        info!(cleared, "Cleared all records");
        Ok(self.commit(Some("All records cleared")))
    }

    /// Exports the records to `sink`. Nothing in the session changes.
    pub fn export(&self, sink: &mut dyn ExportSink) -> EstimatorResult<Outcome> {
        let text = render_export(self.store.records(), &self.currency_symbol)?;
        sink.accept(&text).inspect_err(|err| {
            warn!(error = %err, "Export sink rejected records");
        })?;

        info!(records = self.store.len(), bytes = text.len(), "Exported records");
        Ok(Outcome {
            view: self.view(),
            notification: Some(
                Notification::success("Shift records copied to clipboard!")
                    .dismiss_after(self.dismiss_after_ms),
            ),
        })
    }

    /// Swaps in an edited record, provided the history totals stay
    /// representable.
    fn replace_record(&mut self, edited: ShiftRecord) -> EstimatorResult<Outcome> {
        let after_edit = self
            .store
            .records()
            .iter()
            .map(|record| if record.id == edited.id { &edited } else { record });
        summarize_history(after_edit)
            .inspect_err(|err| warn!(record_id = %edited.id, error = %err, "Rejected edit"))?;

        let slot = self.store.get_mut(&edited.id)?;
        *slot = edited;
        Ok(self.commit(None))
    }

    fn unchanged(&self) -> Outcome {
        Outcome {
            view: self.view(),
            notification: None,
        }
    }

    /// Persists the records and renders the result.
    fn commit(&mut self, success: Option<&str>) -> Outcome {
        let notification = match self.store.persist() {
            Ok(()) => success.map(Notification::success),
            Err(err) => {
                warn!(slot = %self.store.slot(), error = %err, "Keeping unsaved changes in memory");
                Some(Notification::from(&err))
            }
        };

        Outcome {
            view: self.view(),
            notification: notification.map(|n| n.dismiss_after(self.dismiss_after_ms)),
        }
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("store", &self.store)
            .field("mode", &self.mode)
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

/// Parses a non-negative decimal from user input.
fn parse_non_negative(field: &str, value: &str) -> EstimatorResult<Decimal> {
    let parsed = Decimal::from_str(value.trim()).map_err(|_| EstimatorError::InvalidNumber {
        field: field.to_string(),
        input: value.to_string(),
    })?;

    if parsed < Decimal::ZERO {
        return Err(EstimatorError::negative(field, parsed));
    }
    Ok(parsed)
}
