//! Cross-origin isolation response headers.
//!
//! Browsers only enable `SharedArrayBuffer` and high-resolution timers on
//! pages that are cross-origin isolated, which requires both headers below on
//! the document and on every subresource it loads.

use axum::http::{HeaderName, HeaderValue};
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers added to every response, in emission order.
pub const ISOLATION_HEADERS: [(&str, &str); 2] = [
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-embedder-policy", "require-corp"),
];

type HeaderLayer = SetResponseHeaderLayer<HeaderValue>;

/// Layer stack inserting [`ISOLATION_HEADERS`] into each response.
pub type CrossOriginIsolationLayer = Stack<HeaderLayer, Stack<HeaderLayer, Identity>>;

/// Build the isolation layer.
///
/// Uses overriding semantics: a value already set by an inner service is
/// replaced, so neither header can appear twice. Every other header the
/// inner service produced is left as is.
pub fn cross_origin_isolation() -> CrossOriginIsolationLayer {
    let [(coop_name, coop_value), (coep_name, coep_value)] = ISOLATION_HEADERS;

    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(coop_name),
            HeaderValue::from_static(coop_value),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(coep_name),
            HeaderValue::from_static(coep_value),
        ))
        .into_inner()
}
