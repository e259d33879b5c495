//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line / COI_SERVE_* environment
//!     → cli.rs (clap parsing)
//!     → loader.rs (build ServerConfig)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → passed by value to the HTTP server
//! ```
//!
//! # Design Decisions
//! - No config file; every setting has a default so no argument is required
//! - Config is immutable once loaded
//! - Validation separates syntactic (clap) from semantic checks

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Options;
pub use loader::{load_config, ConfigError};
pub use schema::ServerConfig;
