//! Request envelopes.
//!
//! An [`Envelope`] is one logical call on the wire:
//!
//! ```json
//! {"method": "get_campaigns", "params": ["<api key>", {"name": {"EQUALS": "news"}}]}
//! ```
//!
//! The positional `params` list always starts with the API key. The params
//! object follows only when it has at least one entry: the service treats a
//! one-element and a two-element list differently, so an empty map is dropped
//! rather than sent as `{}` or `null`.

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::auth::ApiKey;

/// Named parameters of a call. Opaque to the transport.
pub type Params = Map<String, Value>;

/// A single JSON-RPC call: method name plus positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    method: String,
    credential: ApiKey,
    params: Option<Params>,
}

impl Envelope {
    /// Builds an envelope. Pass-through only: neither the method nor the
    /// params are validated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use getresponse::{ApiKey, Envelope, Params};
    ///
    /// let key = ApiKey::new("key");
    /// assert_eq!(Envelope::build("ping", &key, None).arity(), 1);
    /// assert_eq!(Envelope::build("ping", &key, Some(Params::new())).arity(), 1);
    ///
    /// let mut params = Params::new();
    /// params.insert("campaign".into(), "abc".into());
    /// assert_eq!(Envelope::build("get_campaign", &key, Some(params)).arity(), 2);
    /// ```
    pub fn build(method: impl Into<String>, credential: &ApiKey, params: Option<Params>) -> Self {
        Self {
            method: method.into(),
            credential: credential.clone(),
            params: params.filter(|params| !params.is_empty()),
        }
    }

    /// Returns the remote method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the params object, if one will be sent.
    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    /// Number of positional arguments: 1 (key only) or 2 (key and params).
    pub fn arity(&self) -> usize {
        if self.params.is_some() { 2 } else { 1 }
    }
}

impl Serialize for Envelope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        state.serialize_field("method", &self.method)?;
        state.serialize_field("params", &Positional(self))?;
        state.end()
    }
}

struct Positional<'a>(&'a Envelope);

impl Serialize for Positional<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.arity()))?;
        seq.serialize_element(self.0.credential.expose())?;
        if let Some(params) = &self.0.params {
            seq.serialize_element(params)?;
        }
        seq.end()
    }
}
