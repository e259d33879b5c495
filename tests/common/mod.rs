//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use coi_serve::{HttpServer, ServerConfig, Shutdown};
use tempfile::TempDir;
use tokio::task::JoinHandle;

pub const INDEX_HTML: &str = "<!DOCTYPE html>\n<title>isolated</title>\n<script src=\"app.js\"></script>\n";

pub const ISOLATION: [(&str, &str); 2] = [
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-embedder-policy", "require-corp"),
];

/// A running server on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub task: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Document root with an index page, a script and an index-less directory.
pub fn write_site() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(root.path().join("app.js"), "console.log(crossOriginIsolated);\n").unwrap();
    std::fs::create_dir(root.path().join("data")).unwrap();
    std::fs::write(root.path().join("data/points.json"), "[1,2,3]").unwrap();
    root
}

/// Start the server for `root` and wait until it accepts connections.
pub async fn start_server(root: &Path, directory_listing: bool) -> TestServer {
    let config = ServerConfig {
        bind_host: "127.0.0.1".into(),
        bind_port: 0,
        document_root: root.to_path_buf(),
        directory_listing,
        ..ServerConfig::default()
    };

    let listener = coi_serve::net::bind(&config.bind_host, config.bind_port)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    // The listener is already bound, so connections queue until the serve
    // loop picks them up; a short pause keeps the first request snappy.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer { addr, shutdown, task }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Both headers present, each exactly once, with the exact value.
pub fn assert_isolated(response: &reqwest::Response) {
    for (name, value) in ISOLATION {
        let values: Vec<_> = response.headers().get_all(name).iter().collect();
        assert_eq!(
            values.len(),
            1,
            "{name} on {} {}",
            response.status(),
            response.url()
        );
        assert_eq!(values[0], value);
    }
}
