//! Configuration loading from the process environment.

use std::env;

use crate::config::schema::ServerConfig;

/// Environment variable naming the listen address.
pub const LISTEN_ADDRESS_VAR: &str = "LISTEN_ADDRESS";

/// Environment variable naming the listen port.
pub const LISTEN_PORT_VAR: &str = "LISTEN_PORT";

/// Resolve the server configuration from the process environment.
///
/// Unset or empty variables fall back to the defaults in
/// [`ServerConfig::default`]. Resolution happens once, at startup.
pub fn load_from_env() -> ServerConfig {
    resolve(|key| env::var(key).ok())
}

/// Resolve configuration through an arbitrary lookup function.
///
/// Factored out of [`load_from_env`] so tests can supply values without
/// mutating process-global environment state.
fn resolve<F>(lookup: F) -> ServerConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ServerConfig::default();
    let value_or = |key: &str, default: String| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    };

    ServerConfig {
        address: value_or(LISTEN_ADDRESS_VAR, defaults.address),
        port: value_or(LISTEN_PORT_VAR, defaults.port),
    }
}
