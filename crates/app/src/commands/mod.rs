//! UI-facing command wrappers

pub mod users;

mod logging_support;
