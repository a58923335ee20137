//! # GetResponse Rust Client
//!
//! Client for the GetResponse API v2, a JSON-RPC service behind a single
//! endpoint.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use getresponse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let client = Client::new("your-api-key")?;
//!
//!     // Check connectivity
//!     assert_eq!(client.ping()?, "pong");
//!
//!     // Call a method
//!     let campaigns = client.get_campaigns(Some(&TextFilter::contains("news")))?;
//!     println!("{}", campaigns);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Batching
//!
//! A `Client<Batched>` defers calls and sends them together:
//!
//! ```rust,no_run
//! use getresponse::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let client = Client::builder().api_key("your-api-key").build_batched()?;
//!
//! client.batch();
//! let campaigns = client.get_campaigns(None)?;
//! let contacts = client.get_contacts(&ContactQuery::new())?;
//!
//! match client.send()? {
//!     Some(outcomes) => {
//!         println!("campaigns: {:?}", outcomes[campaigns.position()]);
//!         println!("contacts: {:?}", outcomes[contacts.position()]);
//!     }
//!     None => eprintln!("batch failed: {:?}", client.error()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Concepts
//!
//! - **One seam**: every operation goes through [`Client::execute`]; the
//!   transport decides whether it runs now ([`SingleCall`]) or later
//!   ([`Batched`]).
//! - **Remote error ≠ batch failure**: inside a batch, a call the service
//!   rejects is an [`Outcome::Failure`] in its slot. Only a failed exchange
//!   makes `send()` return `None`.
//! - **Blocking**: calls block the current thread. Do not call them from
//!   inside an async runtime without `spawn_blocking`.
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod resolve;

// Transport layer
pub mod transport;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

mod user_agent;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use envelope::{Envelope, Params};
pub use error::{Error, ErrorKind, Result};
pub use resolve::{Outcome, RawResponse, RemoteFault, resolve_batch_item, resolve_single};

// Re-export API request types
pub use api::{
    AutoresponderRequest, ContactQuery, CustomFilter, MessageContents, MessageType, NewContact,
    StatsGrouping, SubscribeAction, TextFilter, TextOperator, WebformDetails,
};

// Re-export auth and config types
pub use auth::ApiKey;
pub use config::{DEFAULT_ENDPOINT, TlsConfig, TransportConfig};

// Re-export transport types
pub use transport::{Batched, Deferred, Dispatch, HttpWire, SingleCall, Wire, WireReply};
