//! Raw socket access for tests that need to send bytes no well-behaved
//! client would send.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// What came back for a raw request.
pub struct RawExchange {
    pub received: Vec<u8>,
    /// True when the server closed the connection before the read timeout.
    pub closed_by_server: bool,
}

/// Writes `payload` in one go, half-closes, and reads until the server closes.
pub async fn exchange_raw(addr: SocketAddr, payload: &[u8]) -> RawExchange {
    let mut stream = TcpStream::connect(addr)
        .await
        .expect("Failed to connect to test server");
    stream.write_all(payload).await.expect("Failed to write");
    stream.shutdown().await.expect("Failed to half-close");

    let mut received = Vec::new();
    let closed_by_server = tokio::time::timeout(
        Duration::from_secs(5),
        stream.read_to_end(&mut received),
    )
    .await
    .map(|read| read.is_ok())
    .unwrap_or(false);

    RawExchange {
        received,
        closed_by_server,
    }
}
