use clap::Parser;
use std::process::ExitCode;

use coi_serve::config::{load_config, Options};
use coi_serve::lifecycle::{self, StartupError};
use coi_serve::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let options = Options::parse();
    logging::init(options.verbose);

    match start(&options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            eprintln!("coi-serve: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn start(options: &Options) -> Result<(), StartupError> {
    let config = load_config(options)?;

    tracing::debug!(
        bind_address = %config.bind_address(),
        document_root = %config.document_root.display(),
        directory_listing = config.directory_listing,
        shutdown_grace_secs = config.shutdown_grace.as_secs(),
        "Configuration loaded"
    );

    lifecycle::run(config).await
}
