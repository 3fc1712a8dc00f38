//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, trace middleware)
//!     → handlers.rs (validate body, drive the process runner)
//!     → response to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer, ServeError};
