//! # Roster App
//!
//! UI-facing surface of the user-directory data layer.
//!
//! This crate contains:
//! - `AppContext`: wires config → HTTP gateway → directory service
//! - Command wrappers the UI invokes (refresh/list/create/update/delete)
//! - The static route table for the two UI pages
//! - Logging initialisation for host applications
//!
//! Errors never cross the command boundary as panics; every command returns
//! an explicit `Result` with a display string on the failure side.

pub mod commands;
pub mod context;
pub mod logging;
pub mod routes;

pub use commands::users::{create_user, delete_user, list_users, refresh_users, update_user};
pub use context::AppContext;
pub use logging::init_logging;
pub use routes::{routes, RouteDef};
