//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use getresponse::prelude::*;
//! ```
//!
//! This provides access to:
//! - Client and transport types
//! - Error types
//! - Request and filter types of the convenience operations

pub use crate::{
    api::{
        AutoresponderRequest, ContactQuery, CustomFilter, MessageType, NewContact, StatsGrouping,
        SubscribeAction, TextFilter, TextOperator,
    },
    auth::ApiKey,
    client::{Client, ClientBuilder},
    config::{TlsConfig, TransportConfig},
    error::{Error, ErrorKind, Result},
    resolve::{Outcome, RemoteFault},
    transport::{Batched, Deferred, Dispatch, SingleCall},
};
