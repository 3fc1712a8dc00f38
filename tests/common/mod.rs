//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use download_server::http::ServeError;
use download_server::runner::{DownloadRunner, ProcessOutcome, RunnerError};
use download_server::{HttpServer, Shutdown};

/// What a [`StubRunner`] does when invoked.
#[allow(dead_code)]
pub enum StubBehavior {
    /// Resolve successfully with the given stdout.
    Success { stdout: String },
    /// Resolve with a nonzero-exit outcome carrying the given stderr.
    ExitFailure { stderr: String },
    /// Fail as if the executable were missing.
    SpawnFailure,
    /// Never resolve (a hung child).
    Hang,
}

/// Spy runner with a programmable outcome and optional artificial delay.
pub struct StubRunner {
    calls: AtomicUsize,
    behavior: StubBehavior,
    delay: Duration,
}

#[allow(dead_code)]
impl StubRunner {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            behavior,
            delay: Duration::ZERO,
        }
    }

    pub fn succeeding(stdout: &str) -> Self {
        Self::new(StubBehavior::Success {
            stdout: stdout.to_string(),
        })
    }

    pub fn failing(stderr: &str) -> Self {
        Self::new(StubBehavior::ExitFailure {
            stderr: stderr.to_string(),
        })
    }

    pub fn spawn_failing() -> Self {
        Self::new(StubBehavior::SpawnFailure)
    }

    pub fn hanging() -> Self {
        Self::new(StubBehavior::Hang)
    }

    /// Sleep this long before producing the outcome, to simulate a slow
    /// download.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// How many times the runner has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DownloadRunner for StubRunner {
    async fn run(&self, _url: &str) -> Result<ProcessOutcome, RunnerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.behavior {
            StubBehavior::Success { stdout } => Ok(ProcessOutcome {
                success: true,
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            StubBehavior::ExitFailure { stderr } => Ok(ProcessOutcome {
                success: false,
                stdout: String::new(),
                stderr: stderr.clone(),
            }),
            StubBehavior::SpawnFailure => Err(RunnerError::Spawn {
                program: "yt-dlp".to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "No such file or directory",
                ),
            }),
            StubBehavior::Hang => std::future::pending().await,
        }
    }
}

/// Start a server on an ephemeral port with the given runner.
///
/// Returns the bound address, the shutdown coordinator, and the join handle
/// for the serve loop so tests can assert on how it terminated.
pub async fn start_server(
    runner: Arc<dyn DownloadRunner>,
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), ServeError>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(runner);

    let handle = tokio::spawn({
        let shutdown = shutdown.clone();
        async move { server.run(listener, &shutdown).await }
    });

    (addr, shutdown, handle)
}
