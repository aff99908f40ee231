use std::collections::{btree_map::Entry, BTreeMap};

use crate::models::{NameKey, SubmissionRecord};

/// Submissions keyed by [`NameKey`], at most one per person.
#[derive(Debug, Default)]
pub struct SubmissionRegistry {
    records: BTreeMap<NameKey, SubmissionRecord>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced { previous: SubmissionRecord },
    KeptExisting { rejected: SubmissionRecord },
}

impl SubmissionRegistry {
    pub fn new() -> SubmissionRegistry {
        SubmissionRegistry::default()
    }

    /// Inserts `record` unless a record with the same key is at least as recent.
    ///
    /// Ties keep the record that was registered first.
    pub fn upsert_latest(&mut self, record: SubmissionRecord) -> UpsertOutcome {
        self.upsert_by(record, |new, existing| {
            new.submitted_at > existing.submitted_at
        })
    }

    /// Inserts `record`, or replaces the record with the same key when
    /// `supersedes(new, existing)` holds.
    pub fn upsert_by(
        &mut self,
        record: SubmissionRecord,
        supersedes: impl Fn(&SubmissionRecord, &SubmissionRecord) -> bool,
    ) -> UpsertOutcome {
        match self.records.entry(record.key()) {
            Entry::Vacant(entry) => {
                entry.insert(record);
                UpsertOutcome::Inserted
            }

            Entry::Occupied(mut entry) if supersedes(&record, entry.get()) => {
                let previous = entry.insert(record);
                UpsertOutcome::Replaced { previous }
            }

            Entry::Occupied(_) => UpsertOutcome::KeptExisting { rejected: record },
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NameKey, &SubmissionRecord)> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&NameKey, &mut SubmissionRecord)> {
        self.records.iter_mut()
    }

    pub fn into_records(self) -> Vec<SubmissionRecord> {
        self.records.into_values().collect()
    }
}
