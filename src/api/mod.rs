//! Convenience operations of the GetResponse API.
//!
//! Every operation is a thin wrapper around [`Client::execute`](crate::Client::execute)
//! and works on both transports: a single-call client returns the `result`
//! payload, a batched client returns a [`Deferred`](crate::Deferred) slot.
//!
//! | Group     | Operations                                                    |
//! |-----------|---------------------------------------------------------------|
//! | account   | `get_account_info`, `get_account_from_fields`, blacklist      |
//! | campaigns | `get_campaigns`, `get_campaign`, `get_campaign_by_name`       |
//! | messages  | `get_messages`, `get_message*`, autoresponders                |
//! | contacts  | `get_contacts*`, `get_contact*`, `set_contact*`, add/delete   |
//! | webforms  | `get_webforms`, `get_webform`                                 |
//!
//! The lookups in `derived` combine or post-filter results and are only
//! available on the single-call client.

mod account;
mod campaigns;
mod contacts;
mod derived;
mod filter;
mod messages;
mod webforms;

pub use contacts::{ContactQuery, CustomFilter, NewContact, SubscribeAction};
pub use derived::WebformDetails;
pub use filter::{TextFilter, TextOperator};
pub use messages::{AutoresponderRequest, MessageContents, MessageType, StatsGrouping};

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::envelope::Params;

/// Turns a `json!({...})` literal into call params.
pub(crate) fn params(value: Value) -> Option<Params> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Serializes a request struct into call params.
pub(crate) fn to_params<T: Serialize>(request: &T) -> Result<Option<Params>, Error> {
    let value = serde_json::to_value(request).map_err(|e| {
        Error::invalid_argument(format!("Failed to encode request: {}", e)).with_source(e)
    })?;
    Ok(params(value))
}

/// A `[{name, content}]` list, the shape custom fields take on the wire.
pub(crate) fn name_content<'a, C: Serialize + 'a>(
    pairs: impl IntoIterator<Item = (&'a str, C)>,
) -> Value {
    Value::Array(
        pairs
            .into_iter()
            .map(|(name, content)| serde_json::json!({"name": name, "content": content}))
            .collect(),
    )
}
