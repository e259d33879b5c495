//! Static file server for cross-origin isolated pages.
//!
//! Serves a directory over HTTP and adds
//! `Cross-Origin-Opener-Policy: same-origin` and
//! `Cross-Origin-Embedder-Policy: require-corp` to every response, which
//! browsers require before enabling `SharedArrayBuffer` during local
//! development.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                    COI-SERVE                     │
//!                    │                                                  │
//!   Client Request   │  ┌─────────┐    ┌──────────┐    ┌────────────┐   │
//!   ─────────────────┼─▶│   net   │───▶│   http   │───▶│  ServeDir  │   │
//!                    │  │listener │    │  server  │    │ + listing  │   │
//!                    │  └─────────┘    └──────────┘    └─────┬──────┘   │
//!                    │                                       │          │
//!   Client Response  │  ┌──────────────────────┐             │          │
//!   ◀────────────────┼──│ security::headers    │◀────────────┘          │
//!                    │  │ (COOP + COEP)        │                        │
//!                    │  └──────────────────────┘                        │
//!                    │                                                  │
//!                    │  config · lifecycle · observability              │
//!                    └──────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
