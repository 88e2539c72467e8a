//! Response types for the Earnings Estimator API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::ForecastResult;
use crate::error::EstimatorError;
use crate::models::{Notification, Severity};
use crate::tracker::{Outcome, View};

/// Body of a successful forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// The forecast figures.
    pub forecast: ForecastResult,
    /// The view after the forecast.
    pub view: View,
}

/// Body of a successful export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// The exported delimited text.
    pub text: String,
    /// The view and notification.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Severity the interface should show the error with.
    pub severity: Severity,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// The notification to display, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
            details: None,
            notification: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message, Severity::Error)
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message, Severity::Warning)
    }

    /// Attaches details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attaches the notification to display.
    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<&EstimatorError> for ApiErrorResponse {
    fn from(error: &EstimatorError) -> Self {
        let (status, code) = match error {
            EstimatorError::NegativeValue { .. }
            | EstimatorError::InvalidNumber { .. }
            | EstimatorError::ValueTooLarge { .. }
            | EstimatorError::InvalidDate { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
            }
            EstimatorError::InvalidField { .. } => (StatusCode::BAD_REQUEST, "INVALID_FIELD"),
            EstimatorError::RecordNotFound { .. } => (StatusCode::NOT_FOUND, "RECORD_NOT_FOUND"),
            EstimatorError::NoRecords { .. } => (StatusCode::CONFLICT, "NO_RECORDS"),
            EstimatorError::StorageRead { .. } | EstimatorError::StorageWrite { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            EstimatorError::ExportFailed { .. } => (StatusCode::BAD_GATEWAY, "EXPORT_FAILED"),
            EstimatorError::ConfigNotFound { .. } | EstimatorError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.user_message(), error.severity())
                .with_details(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message", Severity::Warning);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(!json.contains("details")); // Should be skipped when None
        assert!(!json.contains("notification"));
    }

    #[test]
    fn test_negative_value_maps_to_unprocessable() {
        let error = EstimatorError::negative("Hours", Decimal::NEGATIVE_ONE);
        let response: ApiErrorResponse = (&error).into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert_eq!(response.error.message, "Hours cannot be negative");
        assert_eq!(response.error.severity, Severity::Warning);
    }

    #[test]
    fn test_value_too_large_maps_to_unprocessable() {
        let error = EstimatorError::too_large("Hourly rate");
        let response: ApiErrorResponse = (&error).into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert_eq!(response.error.severity, Severity::Warning);
    }

    #[test]
    fn test_record_not_found_maps_to_404() {
        let error = EstimatorError::RecordNotFound {
            id: "x".to_string(),
        };
        let response: ApiErrorResponse = (&error).into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_export_failure_is_error_severity() {
        let error = EstimatorError::ExportFailed {
            message: "denied".to_string(),
        };
        let response: ApiErrorResponse = (&error).into();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.severity, Severity::Error);
    }
}
