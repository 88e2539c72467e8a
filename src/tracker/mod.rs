//! The estimator session.
//!
//! A [`Tracker`] owns the record store, the display mode and the current
//! schedule, and exposes every user operation as a method that mutates this
//! state, persists it and returns a freshly rendered [`View`].

mod confirm;
mod session;
mod view;

pub use confirm::{Confirm, DELETE_ALL_PROMPT, DELETE_ONE_PROMPT};
pub use session::{Outcome, RecordField, Tracker};
pub use view::{HistoryRow, View, render};
