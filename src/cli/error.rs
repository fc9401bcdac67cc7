//! CLI-level errors (wraps dispatch errors)

use thiserror::Error;

use crate::domain::DispatchError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Dispatch(#[from] DispatchError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Dispatch(e) => e.exit_code(),
            CliError::Config { .. } => crate::exitcode::CONFIG,
        }
    }
}
