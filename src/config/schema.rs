//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration for the download server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "127.0.0.1").
    pub address: String,

    /// Port to listen on (e.g., "8080").
    pub port: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: "8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// The full bind address, suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, "8080");
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            address: "0.0.0.0".to_string(),
            port: "9000".to_string(),
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
