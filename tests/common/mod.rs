//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use payment_service::config::store::ConfigStore;
use payment_service::http::HttpServer;
use payment_service::lifecycle::Shutdown;
use payment_service::observability::tracing::NoopTraceEmitter;

/// A service instance spawned on an ephemeral port.
///
/// Keep the handle alive for the duration of the test: dropping it drops
/// the shutdown coordinator, which stops the server.
pub struct TestService {
    pub addr: SocketAddr,
    pub config_path: PathBuf,
    _shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Rewrite the backing config file with the given pool size.
    #[allow(dead_code)]
    pub fn write_pool_size(&self, pool_size: u32) {
        std::fs::write(
            &self.config_path,
            format!("[database]\nconnection_pool_size = {}\n", pool_size),
        )
        .unwrap();
    }
}

/// Write a config file with the given pool size and start a service
/// instance backed by it, with tracing disabled.
pub async fn spawn_service(name: &str, pool_size: u32) -> TestService {
    let config_path =
        std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
    std::fs::write(
        &config_path,
        format!("[database]\nconnection_pool_size = {}\n", pool_size),
    )
    .unwrap();

    let store = Arc::new(ConfigStore::from_path(Some(config_path.clone())));
    let shutdown = Shutdown::new();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(store, Arc::new(NoopTraceEmitter));
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        addr,
        config_path,
        _shutdown: shutdown,
    }
}
