//! Error types for rigscan-exec

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when executing a command
#[derive(Error, Debug, Clone)]
pub enum ExecError {
    /// Command execution failed
    #[error("command execution failed: {status} - {stderr}")]
    CommandFailed {
        /// Exit status code
        status: i32,
        /// Stderr output
        stderr: String,
    },

    /// Command timed out
    #[error("command timed out after {timeout:?}")]
    Timeout {
        /// Timeout duration that was exceeded
        timeout: Duration,
    },

    /// Process spawn error
    #[error("failed to spawn process: {0}")]
    SpawnError(String),

    /// I/O error during execution
    #[error("I/O error: {0}")]
    IoError(String),
}

impl ExecError {
    /// Check if the tool never produced a result at all
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ExecError::SpawnError(_) | ExecError::Timeout { .. })
    }
}
