use super::config::ServerConfig;
use super::connection::{Connection, FrameError};
use super::dispatch::Dispatcher;
use crate::collection::FunkoStore;
use crate::protocol::{CommandKind, ResponseEnvelope};
use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, info_span, warn, Instrument};

struct Listener {
    listener: TcpListener,
    dispatcher: Dispatcher,
    config: Arc<ServerConfig>,
    next_connection_id: u64,
}

/// Binds the configured address and serves until ctrl-c.
///
/// Failing to bind is returned to the caller, everything that goes wrong
/// within a single connection is only logged.
pub async fn run_server(store: Arc<dyn FunkoStore>, config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to listen on {}", address))?;
    info!("Server listening on {}", listener.local_addr()?);

    serve(listener, Dispatcher::new(store), config, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Could not listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    })
    .await;
    Ok(())
}

/// Accepts connections on `listener` until `shutdown` completes.
pub async fn serve(
    listener: TcpListener,
    dispatcher: Dispatcher,
    config: ServerConfig,
    shutdown: impl Future,
) {
    let mut server = Listener {
        listener,
        dispatcher,
        config: Arc::new(config),
        next_connection_id: 0,
    };

    tokio::select! {
        _ = server.run() => {}
        _ = shutdown => {
            info!("Shutting down");
        }
    }
}

impl Listener {
    async fn run(&mut self) {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(err) => {
                    // Usually out of file descriptors, give other connections
                    // a chance to finish.
                    error!("Failed to accept connection: {}", err);
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                }
            };

            self.next_connection_id += 1;
            let span = info_span!("connection", id = self.next_connection_id, %peer);
            let dispatcher = self.dispatcher.clone();
            let config = self.config.clone();

            tokio::spawn(handle_connection(socket, dispatcher, config).instrument(span));
        }
    }
}

async fn handle_connection(socket: TcpStream, dispatcher: Dispatcher, config: Arc<ServerConfig>) {
    info!("Client connected");
    let mut connection = Connection::new(socket);

    let read = connection
        .read_request(config.request_timeout, config.max_request_bytes)
        .await;
    let response = match read {
        Ok(payload) => {
            info!("Client finished sending {} bytes, processing request", payload.len());
            dispatcher.dispatch(&payload)
        }
        Err(FrameError::Io(err)) => {
            warn!("Connection error while receiving request: {}", err);
            return;
        }
        Err(err) => {
            warn!("Malformed request: {}", err);
            ResponseEnvelope::failure(CommandKind::Add, err.to_string())
        }
    };

    match connection.write_response(&response).await {
        Ok(()) => info!(
            "Sent {} response (success: {}), connection closed by server",
            response.kind, response.success
        ),
        Err(err) => warn!("Error writing response, dropping connection: {}", err),
    }
}
