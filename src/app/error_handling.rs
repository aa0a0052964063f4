//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// For `SanitizerError` the user message is always shown and the developer
/// message (code, description and source chain) is added in verbose mode.
/// Any other error is printed with its chain and exits with status 1.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::SanitizerError;

    error!("Fatal error: {}", error);

    let exit_code = if let Some(sanitizer_err) = error.downcast_ref::<SanitizerError>() {
        eprintln!("{}", sanitizer_err.user_message());

        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", sanitizer_err.developer_message());
        }

        sanitizer_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}
