//! The account API key.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A GetResponse account API key.
///
/// The key is sent verbatim as the first positional argument of every call.
/// It is immutable once the client is built, never shown by `Debug`, and
/// wiped from memory when dropped.
///
/// Keys are listed at <https://app.getresponse.com/manage_api.html>.
///
/// ## Example
///
/// ```rust
/// use getresponse::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef");
/// assert_eq!(key.expose(), "0123456789abcdef");
/// assert!(!format!("{:?}", key).contains("0123456789abcdef"));
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps an API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as sent on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the key is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
