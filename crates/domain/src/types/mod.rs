//! Domain data types

pub mod user;

pub use user::{UserDraft, UserRecord};
