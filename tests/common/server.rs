//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own data directory.

use funko_collection_server::client::send_request;
use funko_collection_server::collection::{FileFunkoStore, Funko, FunkoPatch};
use funko_collection_server::protocol::{RequestEnvelope, ResponseEnvelope};
use funko_collection_server::server::{serve, Dispatcher, ServerConfig};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Test server instance with an isolated data directory
///
/// When dropped, the server shuts down and the directory is removed.
pub struct TestServer {
    pub addr: SocketAddr,

    // Private fields - keep resources alive until drop
    temp_data_dir: TempDir,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port, backed by a file store in a
    /// fresh temporary directory.
    pub async fn spawn() -> Self {
        Self::spawn_with_config(ServerConfig::default()).await
    }

    pub async fn spawn_with_config(config: ServerConfig) -> Self {
        let temp_data_dir = TempDir::new().expect("Failed to create temp data dir");
        let store =
            FileFunkoStore::new(temp_data_dir.path()).expect("Failed to open file store");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().expect("Failed to get local address");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let config = ServerConfig { port: addr.port(), ..config };
        tokio::spawn(serve(
            listener,
            Dispatcher::new(Arc::new(store)),
            config,
            async {
                shutdown_rx.await.ok();
            },
        ));

        TestServer {
            addr,
            temp_data_dir,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.temp_data_dir.path()
    }

    pub async fn send(&self, request: &RequestEnvelope) -> ResponseEnvelope {
        send_request(self.addr, request, REQUEST_TIMEOUT)
            .await
            .expect("Request to test server failed")
    }

    pub async fn add(&self, user: &str, funko: Funko) -> ResponseEnvelope {
        self.send(&RequestEnvelope::add(user, funko)).await
    }

    pub async fn update(&self, user: &str, id: u32, patch: FunkoPatch) -> ResponseEnvelope {
        self.send(&RequestEnvelope::update(user, id, patch)).await
    }

    pub async fn remove(&self, user: &str, id: u32) -> ResponseEnvelope {
        self.send(&RequestEnvelope::remove(user, id)).await
    }

    pub async fn read(&self, user: &str, id: u32) -> ResponseEnvelope {
        self.send(&RequestEnvelope::read(user, id)).await
    }

    pub async fn list(&self, user: &str) -> ResponseEnvelope {
        self.send(&RequestEnvelope::list(user)).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
