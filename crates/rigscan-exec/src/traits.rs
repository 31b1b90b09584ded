//! Command executor trait

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ExecError;
use crate::result::CommandResult;

/// Abstraction over running a shell command and capturing its output.
///
/// The inventory layer only talks to this trait, so tests can substitute
/// scripted executors for the real process spawner.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run a command and capture its output
    ///
    /// # Errors
    /// Returns an error if the command cannot be spawned or its output
    /// cannot be collected. A non-zero exit status is not an error here;
    /// it is reported through [`CommandResult::status`].
    async fn run(&self, cmd: &str) -> Result<CommandResult, ExecError>;

    /// Run a command, aborting it after `timeout`
    ///
    /// # Errors
    /// Returns [`ExecError::Timeout`] if the command does not complete in
    /// time, otherwise the same errors as [`CommandExecutor::run`].
    async fn run_with_timeout(
        &self,
        cmd: &str,
        timeout: Duration,
    ) -> Result<CommandResult, ExecError>;

    /// Short label identifying the executor implementation
    fn executor_type(&self) -> &'static str;
}
