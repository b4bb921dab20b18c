// Services module for I/O-facing logic
pub mod version_source;
