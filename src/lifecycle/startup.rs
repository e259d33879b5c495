//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener from a validated configuration
//! - Announce the listening URL
//! - Serve until a shutdown signal, then drain within the grace period

use thiserror::Error;
use tokio::task::JoinError;

use crate::config::{ConfigError, ServerConfig};
use crate::http::HttpServer;
use crate::lifecycle::signals::ShutdownSignals;
use crate::lifecycle::Shutdown;
use crate::net::{self, BindError};

/// Anything that stops the server from starting or running.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("failed to install signal handler: {0}")]
    Signal(std::io::Error),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Task(#[from] JoinError),
}

/// Bind, announce and serve until interrupted.
///
/// Returns `Ok(())` after a signal-initiated shutdown, whether or not every
/// connection finished within the grace period.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let listener = net::bind(&config.bind_host, config.bind_port).await?;
    let local_addr = listener.local_addr()?;

    // Registered before the URL is printed: anyone reacting to that line
    // with SIGINT must get a clean exit, not the default signal action.
    let mut signals = ShutdownSignals::install().map_err(StartupError::Signal)?;

    println!(
        "Serving {} with COOP/COEP headers at {}",
        config.document_root.display(),
        net::display_url(&config.bind_host, local_addr.port())
    );

    let grace = config.shutdown_grace;
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        res = &mut server_task => return Ok(res??),
        signal = signals.recv() => {
            tracing::info!(signal, "Shutdown signal received");
        }
    }

    shutdown.trigger();

    match tokio::time::timeout(grace, server_task).await {
        Ok(res) => res??,
        Err(_) => {
            tracing::warn!(grace_secs = grace.as_secs(), "Connections still open after grace period, abandoning");
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
