//! User directory: store, gateway port, and synchronization service

pub mod ports;
pub mod service;
pub mod store;

pub use service::DirectoryService;
