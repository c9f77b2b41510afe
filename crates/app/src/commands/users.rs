//! User directory commands
//!
//! These are the five operations the UI layer calls. Each wraps the
//! directory service, logs a structured outcome line, and maps errors to
//! display strings at the boundary. Nothing here panics; failure is always
//! an explicit `Err` value the UI can inspect.
//!
//! Create and update deliberately leave the directory stale; the UI triggers
//! `refresh_users` afterwards to observe the effect. Delete confirmation is
//! the UI's responsibility.

use std::time::Instant;

use roster_domain::{UserDraft, UserRecord};

use super::logging_support::log_command_execution;
use crate::context::AppContext;

/// Re-fetch the remote collection and replace the local directory.
pub async fn refresh_users(ctx: &AppContext) -> Result<(), String> {
    let start = Instant::now();
    let result = ctx.directory.refresh().await;
    log_command_execution("users::refresh", start.elapsed(), result.is_ok());
    result.map_err(|e| e.to_string())
}

/// Snapshot of the current directory contents, in remote listing order.
pub fn list_users(ctx: &AppContext) -> Vec<UserRecord> {
    ctx.directory.store().snapshot()
}

/// Create a user remotely. On success the returned draft carries its
/// assigned id; the directory itself is unchanged until the next refresh.
pub async fn create_user(ctx: &AppContext, mut draft: UserDraft) -> Result<UserDraft, String> {
    let start = Instant::now();
    let result = ctx.directory.create(&mut draft).await;
    log_command_execution("users::create", start.elapsed(), result.is_ok());
    result.map(|_| draft).map_err(|e| e.to_string())
}

/// Send a full replacement for an existing user. The directory is unchanged
/// until the next refresh.
pub async fn update_user(ctx: &AppContext, record: UserRecord) -> Result<(), String> {
    let start = Instant::now();
    let result = ctx.directory.update(&record).await;
    log_command_execution("users::update", start.elapsed(), result.is_ok());
    result.map_err(|e| e.to_string())
}

/// Delete a user remotely and drop it from the local directory.
pub async fn delete_user(ctx: &AppContext, id: u64) -> Result<(), String> {
    let start = Instant::now();
    let result = ctx.directory.delete(id).await;
    log_command_execution("users::delete", start.elapsed(), result.is_ok());
    result.map_err(|e| e.to_string())
}
