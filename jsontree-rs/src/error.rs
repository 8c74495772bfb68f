//! Error handling for the `jsontree` binary.
//!
//! Building and rendering a tree cannot fail, so the library core has no
//! error type. Only writing the rendered text out can.

use thiserror::Error;

/// Errors reported by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing rendered output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Io(_) => 1,
        }
    }
}

/// Result type for command-line operations.
pub type CliResult<T> = Result<T, CliError>;
