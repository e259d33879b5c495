//! Command-line options.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::schema::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SHUTDOWN_GRACE_SECS};

/// Serve a directory over HTTP with cross-origin isolation headers
/// (COOP: same-origin, COEP: require-corp) on every response.
#[derive(Parser, Debug)]
#[command(name = "coi-serve", version, about)]
pub struct Options {
    /// Port to listen on
    #[arg(env = "COI_SERVE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host name or address to bind
    #[arg(short, long = "bind", env = "COI_SERVE_BIND", default_value = DEFAULT_HOST)]
    pub bind: String,

    /// Directory to serve
    #[arg(short, long, env = "COI_SERVE_DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Return 404 instead of a listing for directories without index.html
    #[arg(long, env = "COI_SERVE_NO_LISTING")]
    pub no_listing: bool,

    /// Seconds to wait for open connections on shutdown
    #[arg(long, value_name = "SECS", env = "COI_SERVE_GRACE", default_value_t = DEFAULT_SHUTDOWN_GRACE_SECS)]
    pub grace: u64,

    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
