//! Runner trait and outcome types.

use async_trait::async_trait;
use thiserror::Error;

/// Captured result of a single child-process invocation.
///
/// Produced once per invocation and owned by the handler that requested it;
/// nothing is shared between concurrent invocations.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Whether the child exited with a zero status.
    pub success: bool,

    /// Everything the child wrote to standard output.
    pub stdout: String,

    /// Everything the child wrote to standard error.
    pub stderr: String,
}

/// Errors that can occur before a child process produces an outcome.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The external program could not be started at all.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Seam between the download handler and the external tool.
///
/// Implementations resolve when the child exits; the calling task is
/// occupied for the full duration of the download.
#[async_trait]
pub trait DownloadRunner: Send + Sync {
    async fn run(&self, url: &str) -> Result<ProcessOutcome, RunnerError>;
}
