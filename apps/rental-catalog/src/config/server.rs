//! HTTP server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// HTTP port for the catalog pages.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl ServerConfig {
    /// Socket address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind_address, self.http_port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            http_port: default_http_port(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

const fn default_http_port() -> u16 {
    5000
}
