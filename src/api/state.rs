//! Application state for the Earnings Estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::tracker::Tracker;

/// Shared application state.
///
/// Holds the single estimator session. Handlers lock it for their whole
/// duration, so requests are applied one at a time.
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    /// Creates a new application state around a tracker session.
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Locks the session.
    ///
    /// A panic in an earlier handler does not lock the session out.
    /// Operations validate their input, including overflow, before mutating
    /// the tracker.
    pub fn tracker(&self) -> MutexGuard<'_, Tracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone_send_sync() {
        // Required for axum state
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }
}
