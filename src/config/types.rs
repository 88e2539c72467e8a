//! Configuration types.
//!
//! These structures are deserialized from the YAML configuration file.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::Level;

use crate::models::{DEFAULT_DISMISS_AFTER_MS, WorkSchedule};
use crate::store::DEFAULT_SLOT;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Where the record log is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding slot files. `None` keeps records in memory only.
    pub directory: Option<PathBuf>,
    /// Slot name for the record log.
    pub slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: None,
            slot: DEFAULT_SLOT.to_string(),
        }
    }
}

/// Notification settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Milliseconds before a notification is dismissed.
    pub dismiss_after_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: DEFAULT_DISMISS_AFTER_MS,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix for monetary amounts.
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
        }
    }
}

/// Initial values for the schedule form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleDefaults {
    /// Default hourly rate.
    pub hourly_rate: Decimal,
    /// Default unpaid break in minutes.
    pub break_minutes: i64,
    /// Default shift start, `HH:MM`.
    #[serde(with = "crate::models::hhmm")]
    pub start_time: NaiveTime,
    /// Default shift end, `HH:MM`.
    #[serde(with = "crate::models::hhmm")]
    pub end_time: NaiveTime,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            hourly_rate: Decimal::ZERO,
            break_minutes: 0,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl ScheduleDefaults {
    /// Builds a schedule covering the single day `today`.
    pub fn schedule_for(&self, today: NaiveDate) -> WorkSchedule {
        WorkSchedule {
            date_from: today,
            date_to: today,
            hourly_rate: self.hourly_rate,
            break_minutes: self.break_minutes,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
}

impl LoggingConfig {
    /// Parses the configured level.
    pub fn max_level(&self) -> Option<Level> {
        self.level.parse().ok()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// The complete estimator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Persistence settings.
    pub storage: StorageConfig,
    /// Notification settings.
    pub notifications: NotificationConfig,
    /// Display settings.
    pub display: DisplayConfig,
    /// Initial schedule values.
    pub defaults: ScheduleDefaults,
    /// Logging settings.
    pub logging: LoggingConfig,
}
