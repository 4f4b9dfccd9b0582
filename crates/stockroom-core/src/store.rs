// Rust guideline compliant 2026-10-15

//! In-memory record store.
//!
//! Records are kept in insertion order. Identifiers come from a counter that
//! starts at 1 and only ever increases, so an id is never handed out twice,
//! even after the record that held it is removed.

use crate::{Candidate, Record};

/// Ordered collection of records plus the next-id counter.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Creates an empty store whose first id will be 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Appends a validated candidate and returns the stored record.
    ///
    /// The candidate must have been validated against this store's current
    /// contents; the store itself performs no checks.
    pub fn add(&mut self, candidate: Candidate) -> Record {
        let record = Record {
            id: self.next_id,
            name: candidate.name,
            category: candidate.category,
            price: candidate.price,
        };
        self.next_id += 1;
        self.records.push(record.clone());

        tracing::debug!(id = record.id, name = %record.name, "record added");
        record
    }

    /// Removes the record with the given id.
    ///
    /// # Returns
    ///
    /// `true` if a record was removed, `false` if no record had that id.
    pub fn remove(&mut self, id: u64) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            tracing::debug!(id, "remove ignored, no such record");
            return false;
        };

        // Vec::remove keeps the order of the remaining records
        self.records.remove(index);
        tracing::debug!(id, "record removed");
        true
    }

    /// Returns the record with the given id, if present.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns the id the next added record will receive.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns the number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
