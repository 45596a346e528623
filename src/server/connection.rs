use crate::protocol::{encode_response, ResponseEnvelope};
use bytes::{Bytes, BytesMut};
use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// Why a complete request could not be collected from the peer.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Server error processing request: empty request")]
    Empty,

    #[error("Server error processing request: request exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Server error processing request: request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("connection error: {0}")]
    Io(#[from] io::Error),
}

/// One accepted socket, used for exactly one request and one response.
///
/// The request has no length prefix and no terminator: it is everything the
/// peer sends before shutting down its write side.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
}

impl Connection {
    pub fn new(socket: TcpStream) -> Connection {
        Connection {
            stream: socket,
            buffer: BytesMut::with_capacity(4 * 1024),
        }
    }

    /// Collects the request, giving up after `timeout` or once more than
    /// `max_bytes` have arrived.
    pub async fn read_request(
        &mut self,
        timeout: Duration,
        max_bytes: usize,
    ) -> Result<Bytes, FrameError> {
        match tokio::time::timeout(timeout, self.read_until_half_close(max_bytes)).await {
            Ok(result) => result,
            Err(_) => Err(FrameError::TimedOut(timeout)),
        }
    }

    async fn read_until_half_close(&mut self, max_bytes: usize) -> Result<Bytes, FrameError> {
        loop {
            // 0 means the peer shut down its write side
            let read = self.stream.read_buf(&mut self.buffer).await?;
            if read == 0 {
                break;
            }
            debug!("Received chunk of {} bytes", read);

            if self.buffer.len() > max_bytes {
                return Err(FrameError::TooLarge { limit: max_bytes });
            }
        }

        if self.buffer.is_empty() {
            return Err(FrameError::Empty);
        }

        Ok(self.buffer.split().freeze())
    }

    /// Writes the response and closes the write side once the bytes have been
    /// handed to the transport.
    pub async fn write_response(&mut self, response: &ResponseEnvelope) -> io::Result<()> {
        let bytes = encode_response(response)?;
        self.stream.write_all(&bytes).await?;
        self.stream.flush().await?;
        self.stream.shutdown().await
    }
}
