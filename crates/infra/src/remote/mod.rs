//! REST gateway for the remote users collection
//!
//! Wire types and the gateway implementation live together here; nothing
//! outside this module needs to know what the remote payloads look like.

pub mod gateway;
pub mod types;

pub use gateway::RestUserGateway;
