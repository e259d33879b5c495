//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events and spans (request spans from TraceLayer)
//!     → logging.rs subscriber (env filter, stderr)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - stdout is reserved for the startup line; logs go to stderr
//! - RUST_LOG overrides the verbosity flag

pub mod logging;
