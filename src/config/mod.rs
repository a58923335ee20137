//! Configuration types for the GetResponse client.
//!
//! This module provides configuration options for:
//! - [`TransportConfig`]: Endpoint and timeouts for the HTTP exchange
//! - [`TlsConfig`]: TLS/SSL settings

mod tls;
mod transport;

pub use tls::TlsConfig;
pub use transport::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, TransportConfig,
};
