//! HTTP API module for the Earnings Estimator.
//!
//! Each endpoint corresponds to one user action of the estimator interface:
//! submitting the forecast form, generating a range, editing or deleting a
//! row, clearing the log and copying it out.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ConfirmQuery, EditRequest, ModeRequest};
pub use response::{ApiError, ExportResponse, ForecastResponse};
pub use state::AppState;
