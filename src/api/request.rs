//! Request types for the Earnings Estimator API.

use serde::Deserialize;

use crate::models::DisplayMode;

/// Body of `PATCH /history/{id}`.
///
/// `value` may be a JSON string or number; it is handed to the tracker as
/// text, the way an input field would deliver it.
#[derive(Debug, Clone, Deserialize)]
pub struct EditRequest {
    /// The field to edit: `date`, `hours` or `salary`.
    pub field: String,
    /// The new value.
    pub value: serde_json::Value,
}

impl EditRequest {
    /// Returns the value as input text.
    pub fn value_text(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Query string of the delete endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ConfirmQuery {
    /// The user's answer to the confirmation prompt.
    #[serde(default)]
    pub confirm: bool,
}

/// Body of `PUT /mode`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ModeRequest {
    /// The display mode to switch to.
    pub mode: DisplayMode,
}
