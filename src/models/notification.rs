//! User-facing notifications.

use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;

/// How long a notification stays visible unless configured otherwise.
pub const DEFAULT_DISMISS_AFTER_MS: u64 = 2000;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The operation completed.
    Success,
    /// The input was rejected and nothing changed.
    Warning,
    /// Something outside the estimator failed.
    Error,
}

/// A transient message for the notification surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// The severity of the message.
    pub severity: Severity,
    /// The message text.
    pub message: String,
    /// Milliseconds before the message is dismissed.
    pub dismiss_after_ms: u64,
}

impl Notification {
    /// Creates a notification with the default dismiss interval.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            dismiss_after_ms: DEFAULT_DISMISS_AFTER_MS,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Overrides the dismiss interval.
    pub fn dismiss_after(mut self, millis: u64) -> Self {
        self.dismiss_after_ms = millis;
        self
    }
}

impl From<&EstimatorError> for Notification {
    fn from(error: &EstimatorError) -> Self {
        Self::new(error.severity(), error.user_message())
    }
}
