//! Input/output, configuration and error handling

/// Command-line arguments and the map processing pipeline
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display
pub mod progress;
/// Configuration property trees
pub mod property;
