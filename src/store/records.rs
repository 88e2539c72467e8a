//! The in-memory record collection and its persistent slot.

use tracing::{debug, warn};

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::ShiftRecord;

use super::kv::KeyValueStore;

/// Slot name the record log is stored under by default.
pub const DEFAULT_SLOT: &str = "hybridWorkLog";

/// An ordered collection of shift records backed by a key-value slot.
///
/// Mutating methods only change the in-memory collection; [`persist`]
/// writes the whole collection back as one value.
///
/// [`persist`]: RecordStore::persist
pub struct RecordStore {
    records: Vec<ShiftRecord>,
    backend: Box<dyn KeyValueStore>,
    slot: String,
}

impl RecordStore {
    /// Opens the store, loading whatever the slot currently holds.
    ///
    /// A slot that cannot be read or parsed yields an empty collection; the
    /// failure is logged and otherwise ignored.
    pub fn open(backend: Box<dyn KeyValueStore>, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let records = match Self::read_slot(backend.as_ref(), &slot) {
            Ok(records) => records,
            Err(err) => {
                warn!(slot = %slot, error = %err, "Falling back to an empty record log");
                Vec::new()
            }
        };
        debug!(slot = %slot, records = records.len(), "Opened record store");

        Self {
            records,
            backend,
            slot,
        }
    }

    fn read_slot(backend: &dyn KeyValueStore, slot: &str) -> EstimatorResult<Vec<ShiftRecord>> {
        match backend.get(slot)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| EstimatorError::StorageRead {
                slot: slot.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Returns the slot name.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Returns the records in storage order.
    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the whole collection.
    pub fn replace_all(&mut self, records: Vec<ShiftRecord>) {
        self.records = records;
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> EstimatorResult<&ShiftRecord> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| EstimatorError::RecordNotFound { id: id.to_string() })
    }

    /// Looks up a record by id for modification.
    pub fn get_mut(&mut self, id: &str) -> EstimatorResult<&mut ShiftRecord> {
        self.records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| EstimatorError::RecordNotFound { id: id.to_string() })
    }

    /// Removes and returns the record with the given id.
    pub fn remove(&mut self, id: &str) -> EstimatorResult<ShiftRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| EstimatorError::RecordNotFound { id: id.to_string() })?;
        Ok(self.records.remove(index))
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Writes the whole collection to the slot.
    ///
    /// On failure the in-memory collection is left as it is.
    pub fn persist(&mut self) -> EstimatorResult<()> {
        let value =
            serde_json::to_string(&self.records).map_err(|e| EstimatorError::StorageWrite {
                slot: self.slot.clone(),
                message: e.to_string(),
            })?;
        self.backend.set(&self.slot, &value)?;
        debug!(slot = %self.slot, records = self.records.len(), "Persisted record log");
        Ok(())
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("slot", &self.slot)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
