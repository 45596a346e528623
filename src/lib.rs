//! Funko Collection Server Library
//!
//! Per-user Funko collections served over a single-shot TCP JSON protocol.
//! This library exposes the internal modules for the binaries and tests.

pub mod cli_style;
pub mod client;
pub mod collection;
pub mod config;
pub mod protocol;
pub mod server;

// Re-export commonly used types for convenience
pub use collection::{FileFunkoStore, Funko, FunkoStore, MemoryFunkoStore};
pub use server::{run_server, serve, Dispatcher, ServerConfig};
