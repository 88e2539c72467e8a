//! Record id generation.
//!
//! Ids come from an injectable generator so that production records get
//! collision-free UUIDs while tests can rely on a predictable sequence.

use uuid::Uuid;

/// Produces unique ids for new shift records.
pub trait IdGenerator: Send {
    /// Returns an id not previously returned by this generator.
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic ids of the form `rec-0001`, `rec-0002`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    /// Creates a generator whose first id is `rec-0001`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("rec-{:04}", self.counter)
    }
}
