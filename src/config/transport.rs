//! Settings for the HTTP exchange beneath both transports.

use std::time::Duration;

use url::Url;

use super::TlsConfig;
use crate::Error;

/// Default GetResponse API v2 endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://api2.getresponse.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP exchange.
///
/// Resolved once, when the client is built; a built client never changes
/// its endpoint.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use getresponse::TransportConfig;
///
/// let config = TransportConfig::builder()
///     .endpoint("https://api2.getresponse.com")
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.endpoint, "https://api2.getresponse.com");
///
/// let defaults = TransportConfig::default();
/// assert_eq!(defaults.endpoint, "http://api2.getresponse.com");
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct TransportConfig {
    /// Endpoint URL all calls are posted to.
    #[builder(into, default = DEFAULT_ENDPOINT.to_string())]
    pub endpoint: String,

    /// Timeout for a whole exchange (connect, send, receive).
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,

    /// Timeout for establishing the connection.
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,

    /// TLS settings.
    #[builder(default)]
    pub tls: TlsConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TransportConfig {
    /// Parses the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the endpoint is not an absolute
    /// `http`/`https` URL.
    pub fn endpoint_url(&self) -> Result<Url, Error> {
        let url = Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::configuration(format!(
                "unsupported endpoint scheme `{}`",
                scheme
            ))),
        }
    }
}
