//! The GetResponse client.
//!
//! [`Client`] is generic over its transport strategy:
//!
//! - `Client<SingleCall>` (the default) sends every call in its own blocking
//!   exchange and returns the `result` payload.
//! - `Client<Batched>` defers calls while a batch is open and returns a
//!   [`Deferred`] slot per call; [`Client::send`] flushes them in one
//!   exchange.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use getresponse::Client;
//!
//! let client = Client::new("your-api-key")?;
//! assert_eq!(client.ping()?, "pong");
//!
//! let batch = Client::builder().api_key("your-api-key").build_batched()?;
//! batch.batch();
//! batch.get_campaigns(None)?;
//! batch.get_account_info()?;
//! match batch.send()? {
//!     Some(outcomes) => println!("{} outcomes", outcomes.len()),
//!     None => eprintln!("batch failed: {:?}", batch.error()),
//! }
//! # Ok::<(), getresponse::Error>(())
//! ```

mod builder;
mod inner;

pub use builder::{ClientBuilder, HasApiKey, NoApiKey};

use std::sync::Arc;

use serde_json::Value;

use crate::auth::ApiKey;
use crate::envelope::{Envelope, Params};
use crate::resolve::Outcome;
use crate::transport::{Batched, Deferred, Dispatch, SingleCall};
use crate::{Error, ErrorKind};

/// The GetResponse API client.
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. Clones share the transport, so
/// clones of a `Client<Batched>` share one batch.
pub struct Client<D = SingleCall> {
    inner: Arc<inner::ClientInner<D>>,
}

impl Client<SingleCall> {
    /// Creates a new client builder.
    ///
    /// The builder uses the typestate pattern: `build()` only exists once an
    /// API key has been provided.
    pub fn builder() -> ClientBuilder<NoApiKey> {
        ClientBuilder::new()
    }

    /// Creates a single-call client for the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, Error> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Checks that the service is reachable and the key is accepted.
    ///
    /// Returns the `ping` field of the result, `"pong"` on a healthy service.
    ///
    /// # Errors
    ///
    /// Any error of [`execute`](Self::execute), or `InvalidResponse` if the
    /// result carries no string `ping` field.
    pub fn ping(&self) -> Result<String, Error> {
        let result = self.execute("ping", None)?;
        result
            .get("ping")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::invalid_response(format!("ping result has no `ping` field: {}", result))
            })
    }
}

impl<D: Dispatch> Client<D> {
    /// Issues one call through the client's transport.
    ///
    /// This is the seam every convenience method goes through. On a
    /// single-call client it returns the `result` payload; on a batched
    /// client it returns the call's [`Deferred`] slot.
    ///
    /// # Errors
    ///
    /// Single-call: `Transport`, `Protocol`, `InvalidResponse` or `Remote`.
    /// Batched: `State` when no batch is open.
    pub fn execute(&self, method: &str, params: Option<Params>) -> Result<D::Output, Error> {
        let envelope = Envelope::build(method, &self.inner.api_key, params);
        self.inner.transport.issue(envelope)
    }

    /// Returns the endpoint calls are sent to.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &D {
        &self.inner.transport
    }

    pub(crate) fn from_inner(inner: inner::ClientInner<D>) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl Client<Batched> {
    /// Opens a batch. Pending calls and the last error are discarded.
    ///
    /// Returns `&Self` so a batch can be started inline:
    /// `client.batch().get_campaigns(None)?`.
    pub fn batch(&self) -> &Self {
        self.inner.transport.open();
        self
    }

    /// Sends every call registered since [`batch`](Self::batch) and closes
    /// the batch.
    ///
    /// `Ok(Some(outcomes))` holds one [`Outcome`] per call in registration
    /// order. `Ok(None)` means the exchange itself failed; see
    /// [`error`](Self::error).
    ///
    /// # Errors
    ///
    /// Returns a `State` error if no batch is open.
    pub fn send(&self) -> Result<Option<Vec<Outcome>>, Error> {
        self.inner.transport.flush()
    }

    /// Returns the failure of the last [`send`](Self::send), if it failed.
    pub fn error(&self) -> Option<String> {
        self.inner.transport.last_error()
    }

    /// Returns `true` while a batch is open.
    pub fn is_open(&self) -> bool {
        self.inner.transport.is_open()
    }

    /// Registers a `ping` call in the open batch.
    ///
    /// # Errors
    ///
    /// Returns a `State` error if no batch is open.
    pub fn ping(&self) -> Result<Deferred, Error> {
        self.execute("ping", None)
    }
}

impl<D> Clone for Client<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for Client<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.inner.endpoint)
            .field("api_key", &self.inner.api_key)
            .field("transport", &self.inner.transport)
            .finish()
    }
}

/// Extracts an object result, for the helpers that post-filter one.
pub(crate) fn expect_object<'a>(
    method: &str,
    result: &'a Value,
) -> Result<&'a serde_json::Map<String, Value>, Error> {
    result.as_object().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidResponse,
            format!("`{}` returned {} where an object was expected", method, result),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockWire;
    use serde_json::json;

    fn single(wire: &Arc<MockWire>) -> Client {
        Client::builder().api_key("key").wire(wire.clone()).build().unwrap()
    }

    fn batched(wire: &Arc<MockWire>) -> Client<Batched> {
        Client::builder()
            .api_key("key")
            .wire(wire.clone())
            .build_batched()
            .unwrap()
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
        assert_send_sync::<Client<Batched>>();
    }

    #[test]
    fn test_execute_returns_result() {
        let wire = Arc::new(MockWire::new());
        wire.reply_json(200, json!({"result": {"ping": "pong"}}));

        let client = single(&wire);
        assert_eq!(client.execute("ping", None).unwrap(), json!({"ping": "pong"}));
        assert_eq!(wire.requests(), vec![json!({"method": "ping", "params": ["key"]})]);
    }

    #[test]
    fn test_execute_sends_params() {
        let wire = Arc::new(MockWire::new());
        wire.reply_json(200, json!({"result": {}}));

        let mut params = Params::new();
        params.insert("campaign".into(), json!("CAMPAIGN_ID"));
        single(&wire).execute("get_campaign", Some(params)).unwrap();

        assert_eq!(
            wire.requests()[0],
            json!({"method": "get_campaign", "params": ["key", {"campaign": "CAMPAIGN_ID"}]})
        );
    }

    #[test]
    fn test_ping() {
        let wire = Arc::new(MockWire::new());
        wire.reply_json(200, json!({"result": {"ping": "pong"}}));
        assert_eq!(single(&wire).ping().unwrap(), "pong");
    }

    #[test]
    fn test_ping_without_field() {
        let wire = Arc::new(MockWire::new());
        wire.reply_json(200, json!({"result": {"status": "ok"}}));
        let err = single(&wire).ping().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }

    #[test]
    fn test_remote_error_surfaces() {
        let wire = Arc::new(MockWire::new());
        wire.reply_json(
            200,
            json!({"error": {"message": "Invalid API key", "code": 101}}),
        );
        let err = single(&wire).ping().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.message(), "Invalid API key");
        assert_eq!(err.code(), Some(101));
    }

    #[test]
    fn test_batch_lifecycle() {
        let wire = Arc::new(MockWire::new());
        wire.reply_json(
            200,
            json!([
                {"result": {"ping": "pong"}},
                {"error": {"message": "Missing campaign"}}
            ]),
        );

        let client = batched(&wire);
        assert!(client.ping().is_err());

        let first = client.batch().ping().unwrap();
        let second = client.execute("get_campaign", None).unwrap();
        assert!(client.is_open());
        assert_eq!((first.position(), second.position()), (0, 1));
        assert_eq!(wire.request_count(), 0);

        let outcomes = client.send().unwrap().unwrap();
        assert!(!client.is_open());
        assert!(outcomes[0].is_success());
        assert_eq!(
            outcomes[1].fault().map(|fault| fault.message()),
            Some("Missing campaign")
        );
        assert!(client.error().is_none());
    }

    #[test]
    fn test_batch_failure_reported_through_error() {
        let wire = Arc::new(MockWire::new());
        wire.reply_json(500, json!({}));

        let client = batched(&wire);
        client.batch().ping().unwrap();
        assert!(client.send().unwrap().is_none());
        assert!(client.error().unwrap().contains("500"));

        client.batch();
        assert!(client.error().is_none());
    }

    #[test]
    fn test_clones_share_batch() {
        let wire = Arc::new(MockWire::new());
        let client = batched(&wire);
        let other = client.clone();

        client.batch().ping().unwrap();
        assert!(other.is_open());
        assert_eq!(other.transport().pending(), 1);
    }

    #[test]
    fn test_debug_redacts_key() {
        let wire = Arc::new(MockWire::new());
        let client = Client::builder()
            .api_key("super-secret")
            .wire(wire)
            .build()
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("mock://"));
    }

    #[test]
    fn test_expect_object() {
        let value = json!({"a": 1});
        assert!(expect_object("m", &value).is_ok());
        let err = expect_object("m", &json!([1])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }
}
