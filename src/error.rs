//! Error types for the Earnings Estimator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the estimator can report to its user surface.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Severity;

/// The main error type for the Earnings Estimator.
///
/// Every failure is recoverable: validation errors leave the state untouched,
/// persistence and export errors leave the in-memory state authoritative.
///
/// # Example
///
/// ```
/// use earnings_estimator::error::EstimatorError;
///
/// let error = EstimatorError::RecordNotFound {
///     id: "rec-0001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift record not found: rec-0001");
/// ```
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// A numeric input was negative where only non-negative values are allowed.
    #[error("{field} cannot be negative (got {value})")]
    NegativeValue {
        /// The name of the rejected field.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A numeric input could not be parsed.
    #[error("Invalid number for {field}: '{input}'")]
    InvalidNumber {
        /// The name of the rejected field.
        field: String,
        /// The raw input text.
        input: String,
    },

    /// A value, or a total derived from it, exceeds what can be represented.
    #[error("{field} is too large")]
    ValueTooLarge {
        /// The name of the rejected field.
        field: String,
    },

    /// A date input could not be parsed.
    #[error("Invalid date: '{input}'")]
    InvalidDate {
        /// The raw input text.
        input: String,
    },

    /// An edit named a field that shift records do not have.
    #[error("Unknown record field: {field}")]
    InvalidField {
        /// The requested field name.
        field: String,
    },

    /// No shift record exists with the given id.
    #[error("Shift record not found: {id}")]
    RecordNotFound {
        /// The id that was not found.
        id: String,
    },

    /// An operation needing at least one record ran against an empty log.
    #[error("No records to {action}")]
    NoRecords {
        /// The attempted action, e.g. "copy" or "clear".
        action: String,
    },

    /// The persistent slot could not be read or parsed.
    #[error("Failed to load slot '{slot}': {message}")]
    StorageRead {
        /// The slot name.
        slot: String,
        /// A description of the failure.
        message: String,
    },

    /// The persistent slot could not be written.
    #[error("Failed to save slot '{slot}': {message}")]
    StorageWrite {
        /// The slot name.
        slot: String,
        /// A description of the failure.
        message: String,
    },

    /// The export sink refused the exported text.
    #[error("Export failed: {message}")]
    ExportFailed {
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EstimatorError {
    /// Builds a [`EstimatorError::NegativeValue`] for the named field.
    pub fn negative(field: &str, value: Decimal) -> Self {
        Self::NegativeValue {
            field: field.to_string(),
            value,
        }
    }

    /// Builds a [`EstimatorError::ValueTooLarge`] for the named field.
    pub fn too_large(field: &str) -> Self {
        Self::ValueTooLarge {
            field: field.to_string(),
        }
    }

    /// Returns the notification severity this error is reported with.
    ///
    /// Input problems are warnings; failures of the store, the export sink or
    /// the configuration are errors.
    pub fn severity(&self) -> Severity {
        match self {
            Self::NegativeValue { .. }
            | Self::InvalidNumber { .. }
            | Self::ValueTooLarge { .. }
            | Self::InvalidDate { .. }
            | Self::InvalidField { .. }
            | Self::RecordNotFound { .. }
            | Self::NoRecords { .. } => Severity::Warning,
            Self::StorageRead { .. }
            | Self::StorageWrite { .. }
            | Self::ExportFailed { .. }
            | Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. } => Severity::Error,
        }
    }

    /// Returns the short message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::NegativeValue { field, .. } => format!("{} cannot be negative", field),
            Self::StorageWrite { .. } => "Failed to save changes".to_string(),
            Self::ExportFailed { .. } => "Failed to copy to clipboard".to_string(),
            other => other.to_string(),
        }
    }
}

/// A type alias for Results that return EstimatorError.
pub type EstimatorResult<T> = Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_negative_value_displays_field_and_value() {
        let error = EstimatorError::negative("Hourly rate", Decimal::from_str("-5").unwrap());
        assert_eq!(error.to_string(), "Hourly rate cannot be negative (got -5)");
        assert_eq!(error.user_message(), "Hourly rate cannot be negative");
    }

    #[test]
    fn test_invalid_number_displays_input() {
        let error = EstimatorError::InvalidNumber {
            field: "Hours".to_string(),
            input: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid number for Hours: 'abc'");
    }

    #[test]
    fn test_value_too_large_is_a_warning() {
        let error = EstimatorError::too_large("Salary");
        assert_eq!(error.to_string(), "Salary is too large");
        assert_eq!(error.user_message(), "Salary is too large");
        assert_eq!(error.severity(), Severity::Warning);
    }

    #[test]
    fn test_no_records_displays_action() {
        let error = EstimatorError::NoRecords {
            action: "copy".to_string(),
        };
        assert_eq!(error.to_string(), "No records to copy");
        assert_eq!(error.user_message(), "No records to copy");
    }

    #[test]
    fn test_storage_write_has_friendly_message() {
        let error = EstimatorError::StorageWrite {
            slot: "hybridWorkLog".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to save slot 'hybridWorkLog': disk full"
        );
        assert_eq!(error.user_message(), "Failed to save changes");
    }

    #[test]
    fn test_validation_errors_are_warnings() {
        let error = EstimatorError::InvalidDate {
            input: "not-a-date".to_string(),
        };
        assert_eq!(error.severity(), Severity::Warning);

        let error = EstimatorError::RecordNotFound {
            id: "missing".to_string(),
        };
        assert_eq!(error.severity(), Severity::Warning);
    }

    #[test]
    fn test_sink_and_store_failures_are_errors() {
        let error = EstimatorError::ExportFailed {
            message: "clipboard unavailable".to_string(),
        };
        assert_eq!(error.severity(), Severity::Error);
        assert_eq!(error.user_message(), "Failed to copy to clipboard");

        let error = EstimatorError::StorageRead {
            slot: "hybridWorkLog".to_string(),
            message: "corrupt".to_string(),
        };
        assert_eq!(error.severity(), Severity::Error);
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EstimatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EstimatorResult<()> {
            Err(EstimatorError::RecordNotFound {
                id: "x".to_string(),
            })
        }

        fn propagates_error() -> EstimatorResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
