//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use tracing::debug;

use super::inner::ClientInner;
use crate::{
    Client, Error,
    auth::ApiKey,
    config::{TlsConfig, TransportConfig},
    transport::{Batched, HttpWire, SingleCall, Wire},
};

/// Marker type: API key not yet provided.
pub struct NoApiKey;

/// Marker type: API key has been provided.
pub struct HasApiKey;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so that `build()` is only available once an
/// API key was supplied.
///
/// ## Required Configuration
///
/// - `api_key()`: The account API key
///
/// ## Optional Configuration
///
/// - `endpoint()`: Endpoint URL (default `http://api2.getresponse.com`)
/// - `timeout()` / `connect_timeout()`: Exchange timeouts
/// - `tls_config()`: Custom TLS settings
/// - `wire()`: Replace the HTTP exchange (e.g. with a `MockWire`)
///
/// ## Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use getresponse::Client;
///
/// let client = Client::builder()
///     .api_key("your-api-key")
///     .endpoint("https://api2.getresponse.com")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let batch = Client::builder()
///     .api_key("your-api-key")
///     .build_batched()?;
/// # Ok::<(), getresponse::Error>(())
/// ```
pub struct ClientBuilder<KeyState> {
    api_key: Option<ApiKey>,
    config: TransportConfig,
    wire: Option<Arc<dyn Wire>>,
    _key_state: PhantomData<KeyState>,
}

impl ClientBuilder<NoApiKey> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            api_key: None,
            config: TransportConfig::default(),
            wire: None,
            _key_state: PhantomData,
        }
    }

    /// Sets the account API key.
    pub fn api_key(self, api_key: impl Into<ApiKey>) -> ClientBuilder<HasApiKey> {
        ClientBuilder {
            api_key: Some(api_key.into()),
            config: self.config,
            wire: self.wire,
            _key_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoApiKey> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ClientBuilder<K> {
    /// Sets the endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Sets the timeout for a whole exchange.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Sets the TLS configuration.
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.config.tls = config;
        self
    }

    /// Replaces the whole transport configuration.
    #[must_use]
    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses the given wire instead of an HTTP client. Endpoint, timeout and
    /// TLS settings are then ignored.
    #[must_use]
    pub fn wire(mut self, wire: Arc<dyn Wire>) -> Self {
        self.wire = Some(wire);
        self
    }
}

impl ClientBuilder<HasApiKey> {
    /// Builds a client on the single-call transport.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the endpoint or TLS settings are
    /// invalid.
    pub fn build(self) -> Result<Client<SingleCall>, Error> {
        let (api_key, wire) = self.into_parts()?;
        Ok(Client::from_inner(ClientInner {
            endpoint: wire.endpoint().to_owned(),
            api_key,
            transport: SingleCall::new(wire),
        }))
    }

    /// Builds a client on the batched transport.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the endpoint or TLS settings are
    /// invalid.
    pub fn build_batched(self) -> Result<Client<Batched>, Error> {
        let (api_key, wire) = self.into_parts()?;
        Ok(Client::from_inner(ClientInner {
            endpoint: wire.endpoint().to_owned(),
            api_key,
            transport: Batched::new(wire),
        }))
    }

    fn into_parts(self) -> Result<(ApiKey, Arc<dyn Wire>), Error> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::configuration("an API key is required"))?;

        let wire = match self.wire {
            Some(wire) => wire,
            None => Arc::new(HttpWire::new(&self.config)?),
        };

        debug!(endpoint = wire.endpoint(), "building client");
        Ok((api_key, wire))
    }
}
