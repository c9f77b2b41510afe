//! Wire types for the remote users collection

use roster_domain::UserRecord;
use serde::{Deserialize, Serialize};

/// A user as returned by the remote list endpoint.
///
/// Only the fields the directory consumes are modelled; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Option<RemoteAddress>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Remote address object; only the street line is used.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAddress {
    #[serde(default)]
    pub street: String,
}

/// Response body of a create call. The remote may or may not echo an id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatedUser {
    #[serde(default)]
    pub id: Option<u64>,
}

impl From<RemoteUser> for UserRecord {
    /// Lossy mapping from the remote shape to the local one.
    ///
    /// The first two whitespace-delimited tokens of `name` become first and
    /// last name; middle and trailing tokens are discarded and cannot be
    /// reconstructed.
    fn from(remote: RemoteUser) -> Self {
        let mut tokens = remote.name.split_whitespace();
        let first_name = tokens.next().unwrap_or_default().to_string();
        let last_name = tokens.next().unwrap_or_default().to_string();

        Self {
            id: remote.id,
            first_name,
            middle_name: String::new(),
            last_name,
            email: remote.email,
            address: remote.address.map(|a| a.street).unwrap_or_default(),
            contact_number: remote.phone.unwrap_or_default(),
        }
    }
}
