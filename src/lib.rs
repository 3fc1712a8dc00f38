//! HTTP front-end for triggering media downloads via yt-dlp.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                DOWNLOAD SERVER                │
//!                    │                                               │
//!   POST /download   │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│ handlers │───▶│ runner  │──┼──▶ yt-dlp
//!                    │  │ server  │    │          │    │         │  │   (child
//!   200 / 400 / 500  │  └─────────┘    └──────────┘    └─────────┘  │   process)
//!   ◀────────────────┼───────┘                                      │
//!                    │                                               │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns           │ │
//!                    │  │   ┌─────────┐        ┌───────────────┐   │ │
//!                    │  │   │ config  │        │   lifecycle   │   │ │
//!                    │  │   │  (env)  │        │ signals/drain │   │ │
//!                    │  │   └─────────┘        └───────────────┘   │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Each request runs on its own task; a download request occupies its task
//! for the full duration of the child process. There is no admission control
//! on concurrent child processes, so request load maps directly to child
//! count.

// Core subsystems
pub mod config;
pub mod http;
pub mod runner;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use runner::{DownloadRunner, YtDlpRunner};
