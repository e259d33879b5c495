//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing, isolation headers)
//!     → ServeDir (path resolution, MIME type, conditional/range requests)
//!     → listing.rs (fallback for index-less directories and misses)
//!     → Send to client
//! ```

pub mod listing;
pub mod server;

pub use listing::DirectoryListing;
pub use server::HttpServer;
