//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing)
//! - Serve connections with graceful, bounded shutdown
//!
//! # Design Decisions
//! - Handlers receive their dependencies through `AppState`; nothing is
//!   looked up ambiently at request time
//! - Shutdown happens in two steps: the listener stops accepting as soon as
//!   the signal fires, then in-flight requests get the grace period to
//!   finish before the serve future is dropped

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{download, health};
use crate::lifecycle::{Shutdown, GRACE_PERIOD};
use crate::runner::DownloadRunner;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Executes the external download tool.
    pub runner: Arc<dyn DownloadRunner>,
}

/// Errors terminating the serve loop.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listener or a connection failed at the I/O level.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// In-flight requests were still running when the grace period ended.
    #[error("shutdown did not complete within {0:?}")]
    GraceExpired(Duration),
}

/// HTTP server for the download front-end.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the given runner.
    pub fn new(runner: Arc<dyn DownloadRunner>) -> Self {
        let state = AppState { runner };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/download", post(download))
            .route("/health", get(health))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown coordinator fires, then drain.
    ///
    /// Once the signal is observed the listener stops accepting new
    /// connections and in-flight handlers are given [`GRACE_PERIOD`] to
    /// complete. Handlers still running at the deadline are aborted and the
    /// expiry is reported as [`ServeError::GraceExpired`].
    pub async fn run(self, listener: TcpListener, shutdown: &Shutdown) -> Result<(), ServeError> {
        let addr = listener.local_addr()?;
        let mut drain_rx = shutdown.subscribe();
        let mut observe_rx = shutdown.subscribe();

        tracing::info!(address = %addr, "HTTP server listening");

        let mut server = std::pin::pin!(axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = drain_rx.recv().await;
            })
            .into_future());

        tokio::select! {
            res = server.as_mut() => {
                // Serve loop ended on its own (I/O failure); no drain to do.
                res?;
                tracing::info!("HTTP server stopped");
                return Ok(());
            }
            _ = observe_rx.recv() => {
                tracing::info!(
                    grace_secs = GRACE_PERIOD.as_secs(),
                    "Draining in-flight requests"
                );
            }
        }

        match tokio::time::timeout(GRACE_PERIOD, server.as_mut()).await {
            Ok(res) => {
                res?;
                tracing::info!("HTTP server stopped");
                Ok(())
            }
            Err(_) => Err(ServeError::GraceExpired(GRACE_PERIOD)),
        }
    }
}
