//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig (host, port)
//!     → listener.rs (resolve, bind, BindError on failure)
//!     → TcpListener handed to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Resolution and binding fail separately so diagnostics say which step broke
//! - Nothing stays bound when binding fails

pub mod listener;

pub use listener::{bind, display_url, BindError};
