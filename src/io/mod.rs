//! Command-line front end, configuration constants, and error handling

/// Command-line argument parsing and output rendering
pub mod cli;
/// Constants and logging defaults
pub mod configuration;
/// Error types for parsing and sorting
pub mod error;
