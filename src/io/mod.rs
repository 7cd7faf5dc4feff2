//! Input/output operations and ambient concerns

/// Command-line parsing and the end-to-end runner
pub mod cli;
/// Default constants
pub mod configuration;
/// Error types and path context
pub mod error;
/// Output encoding and saving
pub mod image;
/// Logging subscriber setup
pub mod logging;
/// Stage progress bars
pub mod progress;
/// Base image and tile directory loading
pub mod source;
