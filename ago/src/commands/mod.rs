/// Catalog command handlers and logic
pub mod catalog;

/// Config command handlers
pub mod config;

/// Since and breakdown command handlers and logic
pub mod since;

/// Version command handlers
pub mod version;
