//! Persistence for shift records.
//!
//! The persistent store is an opaque key-value slot holding the whole record
//! collection as JSON. [`RecordStore`] keeps the in-memory collection and
//! writes it back to its slot as a single value.

mod kv;
mod records;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use records::{DEFAULT_SLOT, RecordStore};
