// Shared utilities: configuration and error reporting
pub mod config;
pub mod error;
