//! Building the configuration from command-line options.

use std::fs;
use std::time::Duration;
use thiserror::Error;

use crate::config::cli::Options;
use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "invalid configuration: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    Validation(Vec<ValidationError>),
}

impl From<&Options> for ServerConfig {
    fn from(options: &Options) -> Self {
        Self {
            bind_host: options.bind.clone(),
            bind_port: options.port,
            document_root: options.directory.clone(),
            directory_listing: !options.no_listing,
            shutdown_grace: Duration::from_secs(options.grace),
        }
    }
}

/// Build and validate configuration from parsed options.
///
/// The document root is canonicalized so logs and listings show where files
/// actually come from.
pub fn load_config(options: &Options) -> Result<ServerConfig, ConfigError> {
    let mut config = ServerConfig::from(options);

    validate_config(&config).map_err(ConfigError::Validation)?;
    config.document_root = fs::canonicalize(&config.document_root)?;

    Ok(config)
}
