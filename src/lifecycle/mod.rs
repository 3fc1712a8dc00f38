//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Bind listener → Serve
//!
//! Shutdown (shutdown.rs + http/server.rs):
//!     Signal received → Stop accepting → Drain in-flight → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: stop accept, drain, close
//! - Drain is bounded: forced exit once the grace period elapses
//! - The signal channel is buffered so triggering never blocks, and a
//!   repeated trigger is harmless

pub mod shutdown;
pub mod signals;

use std::time::Duration;

pub use shutdown::Shutdown;

/// Maximum time in-flight handlers are given to finish once shutdown
/// begins. Handlers still running at the deadline are aborted.
pub const GRACE_PERIOD: Duration = Duration::from_secs(5);
