//! Production runner backed by the yt-dlp executable.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::runner::process::{DownloadRunner, ProcessOutcome, RunnerError};

/// Program invoked for downloads, resolved from `PATH`.
const DEFAULT_PROGRAM: &str = "yt-dlp";

/// Runner that shells out to yt-dlp with the target URL as its only
/// argument.
///
/// Output is buffered in memory in full. Download-tool output is small
/// (progress and file names), so no cap or streaming is applied.
pub struct YtDlpRunner {
    program: String,
}

impl YtDlpRunner {
    /// Runner using a specific program name or path.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this runner invokes.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for YtDlpRunner {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[async_trait]
impl DownloadRunner for YtDlpRunner {
    async fn run(&self, url: &str) -> Result<ProcessOutcome, RunnerError> {
        debug!(program = %self.program, url = %url, "spawning download process");

        let output = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| RunnerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(ProcessOutcome {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
