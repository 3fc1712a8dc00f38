//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (LISTEN_ADDRESS, LISTEN_PORT)
//!     → loader.rs (resolve with defaults)
//!     → ServerConfig (immutable)
//!     → passed into the lifecycle manager at startup
//! ```
//!
//! # Design Decisions
//! - Config is resolved exactly once at startup; handlers never consult the
//!   environment themselves
//! - Every field has a default so an empty environment yields a working
//!   local server (127.0.0.1:8080)
//! - The port stays a string: it is only ever joined into a bind address,
//!   and a bad value surfaces as a bind failure at startup

pub mod loader;
pub mod schema;

pub use schema::ServerConfig;
