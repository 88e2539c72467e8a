//! HTTP request handlers for the Earnings Estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EstimatorError;
use crate::export::ClipboardBuffer;
use crate::models::WorkSchedule;
use crate::tracker::{RecordField, Tracker};

use super::request::{ConfirmQuery, EditRequest, ModeRequest};
use super::response::{ApiError, ApiErrorResponse, ExportResponse, ForecastResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/view", get(view_handler))
        .route("/mode", put(mode_handler))
        .route("/forecast", post(forecast_handler))
        .route("/history", delete(clear_handler))
        .route("/history/generate", post(generate_handler))
        .route("/history/:id", patch(edit_handler).delete(delete_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for GET /view.
async fn view_handler(State(state): State<AppState>) -> Response {
    let tracker = state.tracker();
    json_ok(&tracker.view())
}

/// Handler for PUT /mode.
async fn mode_handler(
    State(state): State<AppState>,
    payload: Result<Json<ModeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    info!(correlation_id = %correlation_id, mode = ?request.mode, "Switching display mode");
    let mut tracker = state.tracker();
    json_ok(&tracker.set_mode(request.mode))
}

/// Handler for POST /forecast.
///
/// Validates the schedule, makes it the current one and returns the forecast.
async fn forecast_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkSchedule>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing forecast request");

    let schedule = match payload {
        Ok(Json(schedule)) => schedule,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut tracker = state.tracker();
    match tracker.forecast(schedule) {
        Ok((forecast, view)) => {
            info!(
                correlation_id = %correlation_id,
                days = forecast.days,
                total = %forecast.total,
                "Forecast completed"
            );
            json_ok(&ForecastResponse { forecast, view })
        }
        Err(err) => error_response(&tracker, &err, correlation_id),
    }
}

/// Handler for POST /history/generate.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkSchedule>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing range generation request");

    let schedule = match payload {
        Ok(Json(schedule)) => schedule,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut tracker = state.tracker();
    match tracker.generate_range(schedule) {
        Ok(outcome) => json_ok(&outcome),
        Err(err) => error_response(&tracker, &err, correlation_id),
    }
}

/// Handler for PATCH /history/{id}.
async fn edit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, record_id = %id, "Processing edit request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut tracker = state.tracker();
    let result = request
        .field
        .parse::<RecordField>()
        .and_then(|field| tracker.edit_record(&id, field, &request.value_text()));

    match result {
        Ok(outcome) => json_ok(&outcome),
        Err(err) => error_response(&tracker, &err, correlation_id),
    }
}

/// Handler for DELETE /history/{id}?confirm=true.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        record_id = %id,
        confirmed = query.confirm,
        "Processing delete request"
    );

    let mut tracker = state.tracker();
    let decision = query.confirm;
    match tracker.delete_record(&id, &|_: &str| decision) {
        Ok(outcome) => json_ok(&outcome),
        Err(err) => error_response(&tracker, &err, correlation_id),
    }
}

/// Handler for DELETE /history?confirm=true.
async fn clear_handler(
    State(state): State<AppState>,
    Query(query): Query<ConfirmQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        confirmed = query.confirm,
        "Processing clear request"
    );

    let mut tracker = state.tracker();
    let decision = query.confirm;
    match tracker.clear_all(&|_: &str| decision) {
        Ok(outcome) => json_ok(&outcome),
        Err(err) => error_response(&tracker, &err, correlation_id),
    }
}

/// Handler for POST /export.
///
/// The exported text is returned in the response body, which plays the part
/// of the clipboard.
async fn export_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let tracker = state.tracker();
    let mut clipboard = ClipboardBuffer::new();
    match tracker.export(&mut clipboard) {
        Ok(outcome) => json_ok(&ExportResponse {
            text: clipboard.take().unwrap_or_default(),
            outcome,
        }),
        Err(err) => error_response(&tracker, &err, correlation_id),
    }
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(tracker: &Tracker, err: &EstimatorError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    let mut api_error: ApiErrorResponse = err.into();
    api_error.error = api_error
        .error
        .with_notification(tracker.notification_for(err));
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::malformed_json(
            "Content-Type must be application/json",
        )
        .with_details("MISSING_CONTENT_TYPE"),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SequentialIds;
    use crate::store::{DEFAULT_SLOT, MemoryStore, RecordStore};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let store = RecordStore::open(Box::new(MemoryStore::new()), DEFAULT_SLOT);
        let schedule = WorkSchedule {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            hourly_rate: Decimal::new(20, 0),
            break_minutes: 0,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        };
        AppState::new(Tracker::new(store, Box::new(SequentialIds::new()), schedule))
    }

    async fn send(
        router: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_view_starts_in_forecast_mode() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "GET", "/view", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "forecast");
        assert_eq!(body["main_total"], "$160.00");
        assert_eq!(body["history_visible"], false);
    }

    #[tokio::test]
    async fn test_forecast_rejects_negative_rate() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            "POST",
            "/forecast",
            Some(json!({
                "date_from": "2024-01-01",
                "date_to": "2024-01-03",
                "hourly_rate": "-20",
                "break_minutes": 0,
                "start_time": "09:00",
                "end_time": "17:00"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["severity"], "warning");
        assert_eq!(body["notification"]["message"], "Hourly rate cannot be negative");
        assert_eq!(body["notification"]["dismiss_after_ms"], 2000);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/forecast")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{ not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_edit_unknown_field_returns_400() {
        let state = create_test_state();
        let (status, _) = send(
            create_router(state.clone()),
            "POST",
            "/history/generate",
            Some(json!({
                "date_from": "2024-01-01",
                "date_to": "2024-01-01",
                "hourly_rate": "20",
                "break_minutes": 0,
                "start_time": "09:00",
                "end_time": "17:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            create_router(state),
            "PATCH",
            "/history/rec-0001",
            Some(json!({"field": "rate", "value": "30"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_FIELD");
    }
}
