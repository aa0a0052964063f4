//! CLI command handling
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command execution
//! - Summary rendering

pub mod args;
pub mod router;
pub mod summary;

// Re-export the main CLI structures for convenience
pub use args::Cli;
pub use router::execute_command;
pub use summary::{format_json_summary, format_text_summary};
