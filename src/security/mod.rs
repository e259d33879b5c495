//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response (any status, any branch):
//!     → headers.rs (insert COOP/COEP)
//!     → hyper writes status line and headers
//! ```
//!
//! # Design Decisions
//! - Outermost layer, so no response escapes without the headers
//! - Insert, never append: each header appears exactly once

pub mod headers;

pub use headers::{cross_origin_isolation, CrossOriginIsolationLayer, ISOLATION_HEADERS};
