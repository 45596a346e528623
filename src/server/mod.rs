mod config;
mod connection;
mod dispatch;
mod server;

pub use config::{
    ServerConfig, DEFAULT_MAX_REQUEST_BYTES, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use connection::{Connection, FrameError};
pub use dispatch::Dispatcher;
pub use server::{run_server, serve};
