use wd_core::{EventStore, Record};

use crate::StoreError;

/// Keeps records in memory for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store that already holds `records`.
    pub const fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of persisted records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EventStore for MemoryStore {
    type Error = StoreError;

    fn retrieve(&self) -> Result<Vec<Record>, Self::Error> {
        Ok(self.records.clone())
    }

    fn store(&mut self, records: Vec<Record>) -> Result<(), Self::Error> {
        self.records = records;
        Ok(())
    }
}
