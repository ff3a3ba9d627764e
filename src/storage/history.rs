//! In-memory generation history store.

use crate::models::history::HistoryRecord;

/// History records for the current session, newest first.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record (newest first).
    pub fn add_record(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
    }

    /// All records, already ordered newest first.
    pub fn get_all(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Look up a record by ID.
    pub fn get(&self, id: &str) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Delete a record by ID. Silently ignores non-existent IDs.
    pub fn delete_record(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
