//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use gamejam_backend::config::AppConfig;
use gamejam_backend::lifecycle::Shutdown;
use gamejam_backend::{HttpServer, Store};
use tokio::net::TcpListener;

/// A server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<Store>,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Bind an ephemeral port and spawn the server with the given config.
pub async fn spawn_server(config: AppConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(Store::new());
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store.clone());
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer {
        addr,
        store,
        shutdown,
    }
}

/// Config with the admin site enabled under a known key.
#[allow(dead_code)]
pub fn admin_config(api_key: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.admin.enabled = true;
    config.admin.api_key = api_key.to_string();
    config
}

/// A client that follows no redirects, so redirect responses can be
/// asserted directly.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
