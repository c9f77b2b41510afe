//! # Roster Domain
//!
//! Business domain types and models for Roster.
//!
//! This crate contains:
//! - Domain data types (UserRecord, UserDraft)
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Roster crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{Config, RemoteConfig};
pub use errors::{Result, RosterError};
pub use types::{UserDraft, UserRecord};
