//! Request handlers.
//!
//! # Responsibilities
//! - Validate the download request body before touching the runner
//! - Map runner outcomes to HTTP status codes
//! - Shallow liveness probe
//!
//! # Design Decisions
//! - The body is parsed by hand so every parse failure is a plain 400 with
//!   the serde diagnostic as the body
//! - Wrong methods never reach these handlers; method routing answers 405

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::http::server::AppState;

/// Body accepted by the download endpoint.
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    /// Target to hand to the download tool, verbatim. No scheme or format
    /// validation happens here; a non-empty garbage string is the tool's
    /// problem to reject.
    #[serde(default)]
    pub url: String,
}

/// Handle POST /download: run the download tool for the requested URL.
///
/// Occupies this task for the full duration of the child process. There is
/// no cancellation path if the client disconnects mid-download.
pub async fn download(State(state): State<AppState>, body: Bytes) -> Response {
    let request: DownloadRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "Rejecting download request with invalid body");
            return (StatusCode::BAD_REQUEST, format!("invalid request body: {err}"))
                .into_response();
        }
    };

    if request.url.is_empty() {
        tracing::warn!("Rejecting download request with empty url");
        return (StatusCode::BAD_REQUEST, "url field cannot be empty").into_response();
    }

    tracing::info!(url = %request.url, "Starting download");

    match state.runner.run(&request.url).await {
        Ok(outcome) if outcome.success => {
            // Tool output goes to our own log, not back to the client.
            for line in outcome.stdout.lines() {
                tracing::info!("{line}");
            }
            tracing::info!(url = %request.url, "Download complete");
            StatusCode::OK.into_response()
        }
        Ok(outcome) => {
            tracing::error!(url = %request.url, "Download tool exited with failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to download video: {}", outcome.stderr),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(url = %request.url, error = %err, "Download tool failed to start");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to download video: {err}"),
            )
                .into_response()
        }
    }
}

/// Handle GET /health: liveness probe.
///
/// Always 200. Says nothing about whether the download tool is installed
/// or functional.
pub async fn health() -> &'static str {
    "Ok"
}
