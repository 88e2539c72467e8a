//! Work schedule inputs and display mode.
//!
//! A [`WorkSchedule`] is the set of form inputs every forecast and range
//! materialization is computed from.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, EstimatorResult};

/// The schedule a forecast or materialization is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// First day of the range.
    pub date_from: NaiveDate,
    /// Last day of the range (inclusive).
    pub date_to: NaiveDate,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
    /// Unpaid break per shift, in minutes.
    pub break_minutes: i64,
    /// Shift start time of day.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Shift end time of day; earlier than `start_time` means the next day.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl WorkSchedule {
    /// Rejects a negative break or a negative hourly rate.
    ///
    /// The break is checked first, so a schedule with both negative reports
    /// the break.
    pub fn validate(&self) -> EstimatorResult<()> {
        if self.break_minutes < 0 {
            return Err(EstimatorError::negative(
                "Break time",
                Decimal::from(self.break_minutes),
            ));
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err(EstimatorError::negative("Hourly rate", self.hourly_rate));
        }
        Ok(())
    }

    /// Returns true when the range ends before it starts.
    pub fn is_inverted(&self) -> bool {
        self.date_from > self.date_to
    }
}

/// Which totals the results display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// A projection computed from the current schedule.
    #[default]
    Forecast,
    /// Aggregated totals over the stored records.
    History,
}

/// `HH:MM` time-of-day serialization, also accepting `HH:MM:SS`.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}
