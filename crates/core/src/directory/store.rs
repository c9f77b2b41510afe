//! In-memory user directory store
//!
//! The directory is process-wide shared mutable state. Wrapping it in an
//! owned store keeps mutation rights explicit: refresh replaces the whole
//! list, delete removes single entries, and nothing else touches it.

use parking_lot::RwLock;
use roster_domain::UserRecord;

/// Ordered, in-memory collection of user records.
///
/// Insertion order follows the order returned by the remote list endpoint.
/// The lock protects individual store operations only; interleavings across
/// awaits (a refresh racing a delete) are not sequenced, matching the
/// single-threaded cooperative model this layer was written for.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    records: RwLock<Vec<UserRecord>>,
}

impl DirectoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone out the current contents.
    pub fn snapshot(&self) -> Vec<UserRecord> {
        self.records.read().clone()
    }

    /// Replace the entire directory with a fresh listing.
    pub fn replace_all(&self, records: Vec<UserRecord>) {
        *self.records.write() = records;
    }

    /// Remove every record with the given id.
    ///
    /// Returns `true` when at least one record was removed. Ids are expected
    /// unique, so this removes at most one entry in practice.
    pub fn remove_by_id(&self, id: u64) -> bool {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| record.id != id);
        records.len() != before
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
