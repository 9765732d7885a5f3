//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use rustodon_mock_server::{MockServer, MockServerConfig, Shutdown};

/// A mock server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Absolute URL for a request target on this server.
    pub fn url(&self, target: &str) -> String {
        format!("http://{}{}", self.addr, target)
    }

    /// Trigger shutdown and wait for the serve loop to exit.
    #[allow(dead_code)]
    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = tokio::time::timeout(Duration::from_secs(5), self.handle).await;
    }
}

/// Start the mock server on 127.0.0.1 with an OS-assigned port.
pub async fn start_mock_server() -> TestServer {
    let mut config = MockServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();

    let server = MockServer::new(config);
    let listener = server.bind().await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that never reuses connections or goes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
