//! Command probe: the single gateway collectors use to query the host

use std::sync::Arc;
use std::time::Duration;

use rigscan_exec::CommandExecutor;
use tracing::{debug, instrument};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs one external query and hands back its output lines.
///
/// Every failure mode collapses to an absent result: a tool that cannot be
/// launched, a non-zero exit status, and a timeout all yield `None`. The
/// probe never returns an error and never panics, so a missing tool on a
/// restricted host degrades the affected fields instead of the snapshot.
#[derive(Clone)]
pub struct CommandProbe {
    executor: Arc<dyn CommandExecutor>,
    timeout: Duration,
}

impl CommandProbe {
    /// Create a probe over an executor with the default per-command timeout
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        debug!(executor = executor.executor_type(), "command probe ready");
        Self {
            executor,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-command timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run `cmd` exactly once and capture its stdout lines.
    ///
    /// Returns `Some` only when the command ran and exited with status 0.
    /// stderr is captured by the executor and discarded here.
    #[instrument(skip(self), level = "debug")]
    pub async fn lines(&self, cmd: &str) -> Option<Vec<String>> {
        match self.executor.run_with_timeout(cmd, self.timeout).await {
            Ok(result) if result.success() => Some(result.stdout_lines()),
            Ok(result) => {
                debug!(command = %cmd, status = result.status, "query returned non-zero status");
                None
            }
            Err(e) => {
                debug!(command = %cmd, error = %e, "query unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use rigscan_exec::{CommandResult, ExecError};

    struct FixedExecutor {
        status: i32,
        stdout: &'static str,
    }

    #[async_trait]
    impl CommandExecutor for FixedExecutor {
        async fn run(&self, _cmd: &str) -> Result<CommandResult, ExecError> {
            Ok(CommandResult {
                status: self.status,
                stdout: self.stdout.to_string(),
                stderr: String::new(),
                duration: Duration::ZERO,
            })
        }

        async fn run_with_timeout(
            &self,
            cmd: &str,
            _timeout: Duration,
        ) -> Result<CommandResult, ExecError> {
            self.run(cmd).await
        }

        fn executor_type(&self) -> &'static str {
            "fixed"
        }
    }

    struct UnavailableExecutor;

    #[async_trait]
    impl CommandExecutor for UnavailableExecutor {
        async fn run(&self, _cmd: &str) -> Result<CommandResult, ExecError> {
            Err(ExecError::SpawnError("no such tool".to_string()))
        }

        async fn run_with_timeout(
            &self,
            cmd: &str,
            _timeout: Duration,
        ) -> Result<CommandResult, ExecError> {
            self.run(cmd).await
        }

        fn executor_type(&self) -> &'static str {
            "unavailable"
        }
    }

    #[tokio::test]
    async fn test_lines_on_success() {
        let probe = CommandProbe::new(Arc::new(FixedExecutor {
            status: 0,
            stdout: "a\r\nb\n",
        }));

        assert_eq!(probe.lines("whatever").await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_lines_absent_on_nonzero_status() {
        let probe = CommandProbe::new(Arc::new(FixedExecutor {
            status: 1,
            stdout: "partial output",
        }));

        assert!(probe.lines("whatever").await.is_none());
    }

    #[tokio::test]
    async fn test_lines_absent_on_launch_failure() {
        let probe = CommandProbe::new(Arc::new(UnavailableExecutor));
        assert!(probe.lines("whatever").await.is_none());
    }
}
