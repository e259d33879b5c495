//! TCP listener setup.
//!
//! # Responsibilities
//! - Resolve the configured host name
//! - Bind the first resolved address that accepts the socket
//! - Render the URL announced at startup

use std::io;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::{lookup_host, TcpListener};

/// Error type for listener setup.
#[derive(Debug, Error)]
pub enum BindError {
    /// The host name could not be turned into a socket address.
    #[error("invalid bind address {address}: {source}")]
    Resolve { address: String, source: io::Error },

    /// Every resolved address refused the bind (in use, privileged, ...).
    #[error("failed to bind {address}: {source}")]
    Bind { address: String, source: io::Error },
}

/// Bind a listener on `host:port`.
///
/// Addresses are tried in resolution order and the first successful bind wins;
/// the error from the last attempt is reported when none succeed.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener, BindError> {
    let address = format!("{}:{}", host, port);

    let candidates: Vec<SocketAddr> = lookup_host((host, port))
        .await
        .map_err(|source| BindError::Resolve {
            address: address.clone(),
            source,
        })?
        .collect();

    if candidates.is_empty() {
        return Err(BindError::Resolve {
            address,
            source: io::Error::new(io::ErrorKind::AddrNotAvailable, "resolved to zero addresses"),
        });
    }

    let mut last_error = None;
    for candidate in candidates {
        match TcpListener::bind(candidate).await {
            Ok(listener) => {
                tracing::debug!(%candidate, "Listener bound");
                return Ok(listener);
            }
            Err(e) => {
                tracing::debug!(%candidate, error = %e, "Bind attempt failed");
                last_error = Some(e);
            }
        }
    }

    Err(BindError::Bind {
        address,
        source: last_error
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no address bound")),
    })
}

/// URL a browser should open for a server bound on `host` and `port`.
pub fn display_url(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("http://[{}]:{}/", host, port)
    } else {
        format!("http://{}:{}/", host, port)
    }
}
