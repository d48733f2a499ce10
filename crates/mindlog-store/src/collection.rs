//! The collection of all entries of one journal

use mindlog_api::EntryRecord;
use mindlog_util::EntryId;
use std::collections::HashSet;
use tracing::debug;

use crate::{Entry, StoreError, StoreResult};

/// All entries of a journal.
///
/// Order carries no meaning; derived views sort for themselves. Every
/// mutation checks the entry invariants first and leaves the collection
/// untouched on error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, validating every entry and rejecting duplicate ids
    pub fn from_entries(entries: Vec<Entry>) -> StoreResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(&entry.id) {
                return Err(StoreError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Build a collection without validating; used when restoring a snapshot
    /// that has already been sanitised entry by entry
    pub(crate) fn from_unchecked(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Add a new entry
    pub fn insert(&mut self, entry: Entry) -> StoreResult<()> {
        entry.validate()?;
        if self.contains(&entry.id) {
            return Err(StoreError::DuplicateId(entry.id));
        }

        debug!(entry_id = %entry.id, kind = %entry.kind, "Entry inserted");
        self.entries.push(entry);
        Ok(())
    }

    /// Replace an existing entry with an edited version, returning the old one.
    ///
    /// Kind and creation time must be unchanged and `updated_at` must not go
    /// backwards.
    pub fn replace(&mut self, entry: Entry) -> StoreResult<Entry> {
        entry.validate()?;

        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| StoreError::NotFound(entry.id.clone()))?;

        if slot.kind != entry.kind {
            return Err(StoreError::ImmutableField {
                id: entry.id,
                field: "type",
            });
        }
        if slot.created_at != entry.created_at {
            return Err(StoreError::ImmutableField {
                id: entry.id,
                field: "createdAt",
            });
        }
        if entry.updated_at < slot.updated_at {
            return Err(StoreError::invalid(
                entry.id.as_str(),
                "updatedAt cannot move backwards",
            ));
        }

        debug!(entry_id = %entry.id, "Entry replaced");
        Ok(std::mem::replace(slot, entry))
    }

    /// Remove an entry by id
    pub fn remove(&mut self, id: &EntryId) -> StoreResult<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        debug!(entry_id = %id, "Entry removed");
        Ok(self.entries.remove(index))
    }

    /// Remove every entry, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Stored form of every entry
    pub fn to_records(&self) -> Vec<EntryRecord> {
        self.entries.iter().map(Entry::to_record).collect()
    }
}

impl AsRef<[Entry]> for EntryCollection {
    fn as_ref(&self) -> &[Entry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
