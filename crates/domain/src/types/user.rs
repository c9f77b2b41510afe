//! User record types
//!
//! Local shape of a user as held in the in-memory directory, derived from
//! the remote collection's wire shape by a lossy mapping (only the first two
//! whitespace-delimited name tokens survive).

use serde::{Deserialize, Serialize};

/// A user as held in the local directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    /// Present in the shape for form compatibility; never populated by the
    /// remote mapping.
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    /// Street line of the remote address, empty when the remote has none
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_number: String,
}

/// Input for creating a user: a record that may not have an id yet.
///
/// On successful creation the id is assigned in place, either from the
/// remote response or from the directory-length fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_number: String,
}

impl UserDraft {
    /// Convert into a full record once an id has been assigned.
    ///
    /// Returns `None` while the draft has no id.
    pub fn into_record(self) -> Option<UserRecord> {
        let id = self.id?;
        Some(UserRecord {
            id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            email: self.email,
            address: self.address,
            contact_number: self.contact_number,
        })
    }
}

impl From<UserRecord> for UserDraft {
    fn from(record: UserRecord) -> Self {
        Self {
            id: Some(record.id),
            first_name: record.first_name,
            middle_name: record.middle_name,
            last_name: record.last_name,
            email: record.email,
            address: record.address,
            contact_number: record.contact_number,
        }
    }
}
