//! Configuration schema definitions.

use std::path::PathBuf;
use std::time::Duration;

/// Host bound when none is given.
pub const DEFAULT_HOST: &str = "localhost";

/// Port bound when none is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Seconds to wait for in-flight connections after a shutdown signal.
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 5;

/// Root configuration for the file server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP address to listen on.
    pub bind_host: String,

    /// TCP port to listen on (0 picks an ephemeral port).
    pub bind_port: u16,

    /// Directory tree files are served from.
    pub document_root: PathBuf,

    /// Render an HTML listing for directories without an `index.html`.
    pub directory_listing: bool,

    /// Upper bound on how long shutdown waits for open connections.
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_HOST.to_string(),
            bind_port: DEFAULT_PORT,
            document_root: PathBuf::from("."),
            directory_listing: true,
            shutdown_grace: Duration::from_secs(DEFAULT_SHUTDOWN_GRACE_SECS),
        }
    }
}

impl ServerConfig {
    /// `host:port` as given, for diagnostics.
    pub fn bind_address(&self) -> String {
        if self.bind_host.contains(':') {
            format!("[{}]:{}", self.bind_host, self.bind_port)
        } else {
            format!("{}:{}", self.bind_host, self.bind_port)
        }
    }
}
