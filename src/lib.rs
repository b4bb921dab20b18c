// buildver - build version parsing and reporting
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::version::{FieldRole, Version, VersionError};
