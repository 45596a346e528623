//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{funko, TestServer, TEST_USER};
//!
//! #[tokio::test]
//! async fn test_add() {
//!     let server = TestServer::spawn().await;
//!
//!     let response = server.add(TEST_USER, funko(1)).await;
//!     assert!(response.success);
//! }
//! ```

mod client;
mod fixtures;
mod server;

pub use client::{exchange_raw, RawExchange};
pub use fixtures::*;
pub use server::TestServer;
