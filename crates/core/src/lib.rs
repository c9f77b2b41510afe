//! # Roster Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The in-memory user directory store
//! - Port/adapter interfaces (traits)
//! - The directory service that keeps store and remote in step
//!
//! ## Architecture Principles
//! - Only depends on `roster-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod directory;

// Re-export specific items to avoid ambiguity
pub use directory::ports::UserGateway;
pub use directory::store::DirectoryStore;
pub use directory::DirectoryService;
