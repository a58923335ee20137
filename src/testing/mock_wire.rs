//! Scripted wire for testing without a network.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde_json::Value;

use crate::Error;
use crate::transport::{Wire, WireReply};

const MOCK_ENDPOINT: &str = "mock://api2.getresponse.com/";

/// A [`Wire`] that replays scripted replies in order and records every
/// request body it receives.
///
/// When the script runs dry, `post` fails with a `Transport` error.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use getresponse::Client;
/// use getresponse::testing::MockWire;
/// use serde_json::json;
///
/// let wire = Arc::new(MockWire::new());
/// wire.reply_json(200, json!({"result": {"ping": "pong"}}));
///
/// let client = Client::builder()
///     .api_key("key")
///     .wire(wire.clone())
///     .build()?;
///
/// assert_eq!(client.ping()?, "pong");
/// assert_eq!(wire.requests(), vec![json!({"method": "ping", "params": ["key"]})]);
/// # Ok::<(), getresponse::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MockWire {
    replies: Mutex<VecDeque<Result<WireReply, Error>>>,
    requests: Mutex<Vec<Vec<u8>>>,
}

impl MockWire {
    /// Creates a wire with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply with a JSON body.
    pub fn reply_json(&self, status: u16, body: Value) -> &Self {
        self.replies
            .lock()
            .push_back(Ok(WireReply::new(status, body.to_string())));
        self
    }

    /// Queues a reply with a raw body.
    pub fn reply_raw(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.replies
            .lock()
            .push_back(Ok(WireReply::new(status, body)));
        self
    }

    /// Queues an exchange failure.
    pub fn fail(&self, error: Error) -> &Self {
        self.replies.lock().push_back(Err(error));
        self
    }

    /// Returns the request bodies received so far, decoded as JSON.
    /// Bodies that are not JSON are returned as strings.
    pub fn requests(&self) -> Vec<Value> {
        self.requests
            .lock()
            .iter()
            .map(|body| {
                serde_json::from_slice(body)
                    .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
            })
            .collect()
    }

    /// Returns the number of requests received.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns the number of scripted replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().len()
    }
}

impl Wire for MockWire {
    fn endpoint(&self) -> &str {
        MOCK_ENDPOINT
    }

    fn post(&self, body: Vec<u8>) -> Result<WireReply, Error> {
        self.requests.lock().push(body);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Error::transport("MockWire has no scripted reply")))
    }
}
