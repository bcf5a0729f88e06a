//! Server configuration.

use std::net::SocketAddr;

use crate::upstream::UpstreamConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8000);

/// Top-level configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Upstream train-tracking API settings
    pub upstream: UpstreamConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            upstream: UpstreamConfig::default(),
        }
    }
}
