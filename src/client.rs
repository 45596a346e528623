//! Single-shot client: one connection per request.

use crate::protocol::{decode_response, encode_request, RequestEnvelope, ResponseEnvelope};
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tracing::debug;

/// Sends `request` to the server at `addr` and waits for its response.
///
/// The request is ended by shutting down the write side of the socket, the
/// response is everything received until the server closes the connection.
pub async fn send_request<A: ToSocketAddrs>(
    addr: A,
    request: &RequestEnvelope,
    timeout: Duration,
) -> Result<ResponseEnvelope> {
    tokio::time::timeout(timeout, exchange(addr, request))
        .await
        .with_context(|| format!("No response from server within {:?}", timeout))?
}

async fn exchange<A: ToSocketAddrs>(
    addr: A,
    request: &RequestEnvelope,
) -> Result<ResponseEnvelope> {
    let mut stream = TcpStream::connect(addr)
        .await
        .context("Could not connect to server")?;
    debug!("Connected to server, sending {} request", request.kind);

    stream.write_all(&encode_request(request)?).await?;
    stream.shutdown().await?;

    let mut received = Vec::new();
    stream.read_to_end(&mut received).await?;
    debug!("Server closed the connection after {} bytes", received.len());

    decode_response(&received).with_context(|| {
        format!(
            "Invalid response from server: {}",
            String::from_utf8_lossy(&received)
        )
    })
}
