//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router around the static file service
//! - Wire up middleware (tracing, cross-origin isolation headers)
//! - Serve connections from a bound listener until shutdown

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    Router,
};
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::service_fn;
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerConfig;
use crate::http::listing::DirectoryListing;
use crate::security::cross_origin_isolation;

/// HTTP server for the document root.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The isolation layer is added last so it wraps everything else,
    /// including responses generated by the other layers.
    fn build_router(config: &ServerConfig) -> Router {
        let files = ServeDir::new(&config.document_root).append_index_html_on_directories(true);

        let router = if config.directory_listing {
            let listing = DirectoryListing::new(&config.document_root);
            Router::new().fallback_service(files.fallback(service_fn(move |request: Request<Body>| {
                let listing = listing.clone();
                async move { Ok::<_, Infallible>(listing.respond(request).await) }
            })))
        } else {
            Router::new().fallback_service(files)
        };

        router
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let peer = request
                            .extensions()
                            .get::<ConnectInfo<SocketAddr>>()
                            .map(|ConnectInfo(addr)| *addr);
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            peer = ?peer
                        )
                    })
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(cross_origin_isolation())
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::debug!(
            address = %addr,
            document_root = %self.config.document_root.display(),
            directory_listing = self.config.directory_listing,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::debug!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for embedding or driving without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}
