//! Port interfaces for the user directory
//!
//! These traits define the boundary between directory business logic and
//! whatever transport talks to the remote users collection.

use async_trait::async_trait;
use roster_domain::{Result, UserDraft, UserRecord};

/// Trait for the remote users collection.
///
/// Implementations issue one-shot requests; retry, caching and local state
/// are the service's concern, not the gateway's.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetch the full remote collection, already mapped to local records.
    async fn list(&self) -> Result<Vec<UserRecord>>;

    /// Create a user remotely.
    ///
    /// Returns the remote-assigned id when the response carries one.
    async fn create(&self, draft: &UserDraft) -> Result<Option<u64>>;

    /// Replace the remote resource addressed by `record.id` with `record`.
    async fn update(&self, record: &UserRecord) -> Result<()>;

    /// Delete the remote resource addressed by `id`.
    async fn delete(&self, id: u64) -> Result<()>;
}
