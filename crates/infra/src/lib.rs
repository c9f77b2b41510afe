//! # Roster Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The HTTP client wrapper over reqwest
//! - The REST gateway for the remote users collection
//! - Configuration loading (environment and file based)
//!
//! ## Architecture
//! - Implements traits defined in `roster-core`
//! - Depends on `roster-domain` and `roster-core`
//! - Contains all "impure" code (network I/O, filesystem)

pub mod config;
pub mod errors;
pub mod http;
pub mod remote;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use remote::RestUserGateway;
