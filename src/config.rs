//! Server configuration from command-line flags and environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Runtime configuration for the taskdesk server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "taskdesk")]
#[command(about = "JSON-over-HTTP task service backed by an in-memory store")]
#[command(version)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "TASKDESK_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind the HTTP listener to
    #[arg(short, long, env = "TASKDESK_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log filter directive used when `RUST_LOG` is unset
    #[arg(long, env = "TASKDESK_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    /// Returns the socket address the server listens on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
