//! Core data models for the Earnings Estimator.
//!
//! This module contains the domain models shared by the calculations, the
//! record store and the tracker.

mod ids;
mod notification;
mod schedule;
mod shift_record;

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use notification::{DEFAULT_DISMISS_AFTER_MS, Notification, Severity};
pub(crate) use schedule::hhmm;
pub use schedule::{DisplayMode, WorkSchedule};
pub use shift_record::ShiftRecord;
