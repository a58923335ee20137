//! Internal client implementation.

use crate::auth::ApiKey;

pub(crate) struct ClientInner<D> {
    /// The endpoint URL, as resolved at build time.
    pub endpoint: String,

    /// Account API key, first positional argument of every call.
    pub api_key: ApiKey,

    /// Transport strategy.
    pub transport: D,
}
