//! Directory synchronization service - core business logic

use std::sync::Arc;

use roster_domain::{Result, UserDraft, UserRecord};
use tracing::{debug, error};

use super::ports::UserGateway;
use super::store::DirectoryStore;

/// Keeps the in-memory directory in step with the remote users collection.
///
/// Only `refresh` and `delete` touch the store. `create` and `update` leave
/// it stale on purpose: the caller re-refreshes to observe their effect,
/// mirroring how the consuming UI drives this layer.
pub struct DirectoryService {
    gateway: Arc<dyn UserGateway>,
    store: Arc<DirectoryStore>,
}

impl DirectoryService {
    /// Create a new directory service over the given gateway.
    pub fn new(gateway: Arc<dyn UserGateway>, store: Arc<DirectoryStore>) -> Self {
        Self { gateway, store }
    }

    /// Read access to the live directory store.
    pub fn store(&self) -> &Arc<DirectoryStore> {
        &self.store
    }

    /// Re-fetch the remote collection and replace the directory wholesale.
    ///
    /// On failure the existing directory is left untouched. Overlapping
    /// refreshes are not sequenced; the last response to arrive wins.
    pub async fn refresh(&self) -> Result<()> {
        match self.gateway.list().await {
            Ok(records) => {
                debug!(count = records.len(), "directory refreshed from remote");
                self.store.replace_all(records);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to fetch users from remote");
                Err(err)
            }
        }
    }

    /// Create a user remotely and assign the draft its id in place.
    ///
    /// The id comes from the remote response when present, otherwise falls
    /// back to `directory length + 1`. The fallback is a best-effort
    /// placeholder: it does not account for gaps left by deletions or for
    /// concurrent creates, so it is not guaranteed unique. Kept as-is for
    /// compatibility with the consuming UI.
    ///
    /// The new record is never appended to the directory; callers refresh
    /// to see it listed.
    pub async fn create(&self, draft: &mut UserDraft) -> Result<u64> {
        match self.gateway.create(draft).await {
            Ok(remote_id) => {
                let id = remote_id.unwrap_or(self.store.len() as u64 + 1);
                draft.id = Some(id);
                debug!(user_id = id, fallback = remote_id.is_none(), "user created remotely");
                Ok(id)
            }
            Err(err) => {
                error!(error = %err, "failed to create user remotely");
                Err(err)
            }
        }
    }

    /// Send a full replacement for the remote resource addressed by
    /// `record.id`.
    ///
    /// Never mutates the directory, success or failure; the caller refreshes
    /// to observe the effect.
    pub async fn update(&self, record: &UserRecord) -> Result<()> {
        if let Err(err) = self.gateway.update(record).await {
            error!(user_id = record.id, error = %err, "failed to update user remotely");
            return Err(err);
        }
        debug!(user_id = record.id, "user updated remotely");
        Ok(())
    }

    /// Delete the remote resource and drop the matching directory entry.
    ///
    /// On failure the directory is left unchanged.
    pub async fn delete(&self, id: u64) -> Result<()> {
        if let Err(err) = self.gateway.delete(id).await {
            error!(user_id = id, error = %err, "failed to delete user remotely");
            return Err(err);
        }
        let removed = self.store.remove_by_id(id);
        debug!(user_id = id, removed, "user deleted remotely");
        Ok(())
    }
}
