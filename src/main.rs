//! Binary entry point: wire configuration, signals, and the HTTP server.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use download_server::config::loader;
use download_server::lifecycle::signals;
use download_server::{HttpServer, Shutdown, YtDlpRunner};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "download_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("download-server v0.1.0 starting");

    let config = loader::load_from_env();
    tracing::info!(
        address = %config.address,
        port = %config.port,
        "Configuration loaded"
    );

    // Failure to bind is fatal: no partial-service state.
    let listener = match TcpListener::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(
                address = %config.bind_address(),
                error = %err,
                "Failed to bind listener"
            );
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    let server = HttpServer::new(Arc::new(YtDlpRunner::default()));
    match server.run(listener, &shutdown).await {
        Ok(()) => {
            tracing::info!("Exited cleanly");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Server terminated with error");
            ExitCode::FAILURE
        }
    }
}
