//! Transport trait definitions and common types.
//!
//! Two seams live here:
//!
//! - [`Wire`]: one blocking HTTP POST of a JSON body. [`HttpWire`](super::HttpWire)
//!   is the production implementation; [`MockWire`](crate::testing::MockWire)
//!   replays scripted replies.
//! - [`Dispatch`]: the strategy contract shared by the single-call and the
//!   batched transport. `issue` either resolves a call or defers it.

use serde::de::DeserializeOwned;

use crate::Error;
use crate::envelope::Envelope;

/// HTTP statuses the endpoint may answer with: 200 OK and 204 No Content.
pub const ACCEPTED_STATUSES: [u16; 2] = [200, 204];

/// A raw HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl WireReply {
    /// Creates a reply.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` if the status is 200 or 204.
    pub fn is_accepted(&self) -> bool {
        ACCEPTED_STATUSES.contains(&self.status)
    }

    /// Rejects statuses outside 200/204 with a `Protocol` error naming the
    /// endpoint.
    pub fn accept(&self, endpoint: &str) -> Result<(), Error> {
        if self.is_accepted() {
            Ok(())
        } else {
            Err(Error::protocol(self.status, endpoint))
        }
    }

    /// Decodes the body as JSON. An empty or whitespace-only body (the
    /// 204 case) decodes to `None`.
    pub fn decode<T>(&self) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&self.body).map(Some).map_err(|e| {
            Error::invalid_response(format!("Failed to parse reply: {}", e)).with_source(e)
        })
    }
}

/// One blocking request/response exchange against the endpoint.
///
/// Implementations report only exchange-level failures
/// ([`ErrorKind::Transport`](crate::ErrorKind::Transport)); any HTTP status
/// is returned as a [`WireReply`] for the caller to judge.
pub trait Wire: Send + Sync {
    /// The endpoint URL, for error context.
    fn endpoint(&self) -> &str;

    /// Posts a JSON body and returns the raw reply.
    fn post(&self, body: Vec<u8>) -> Result<WireReply, Error>;
}

/// The transport strategy contract.
///
/// | Strategy                             | `Output`                                |
/// |--------------------------------------|-----------------------------------------|
/// | [`SingleCall`](super::SingleCall)    | `serde_json::Value` (the `result`)      |
/// | [`Batched`](super::Batched)          | [`Deferred`](super::Deferred) position  |
pub trait Dispatch {
    /// What a dispatched call yields.
    type Output;

    /// Sends or registers one call.
    fn issue(&self, envelope: Envelope) -> Result<Self::Output, Error>;
}
