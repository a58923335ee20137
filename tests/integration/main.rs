//! Integration tests for the GetResponse client.
//!
//! These tests drive the real HTTP transport against a local
//! [`wiremock`] server standing in for the JSON-RPC endpoint.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With client logs
//! RUST_LOG=getresponse=trace cargo test --test integration -- --nocapture
//! ```
//!
//! The client is blocking, so every test builds and uses it inside
//! `tokio::task::spawn_blocking` while the mock server runs on the runtime.

mod api_tests;
mod batch_tests;
mod common;
mod single_tests;
