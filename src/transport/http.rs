//! HTTP wire implementation using reqwest's blocking client.

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::trace;
use url::Url;

use super::traits::{Wire, WireReply};
use crate::config::{TlsConfig, TransportConfig};
use crate::error::ErrorKind;
use crate::user_agent;
use crate::Error;

/// Blocking HTTP POST against the configured endpoint.
///
/// Every request carries `Content-Type: application/json`,
/// `Accept: application/json` and the client User-Agent.
#[derive(Clone)]
pub struct HttpWire {
    client: HttpClient,
    endpoint: Url,
}

impl std::fmt::Debug for HttpWire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWire")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpWire {
    /// Creates a wire from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the endpoint is invalid, a CA
    /// certificate cannot be loaded, or the HTTP client cannot be built.
    pub fn new(config: &TransportConfig) -> Result<Self, Error> {
        let endpoint = config.endpoint_url()?;

        let mut client_builder = HttpClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(default_headers())
            .user_agent(user_agent::user_agent());

        client_builder = apply_tls(client_builder, &config.tls)?;

        let client = client_builder.build().map_err(|e| {
            Error::new(
                ErrorKind::Configuration,
                format!("Failed to create HTTP client: {}", e),
            )
            .with_source(e)
        })?;

        Ok(Self { client, endpoint })
    }
}

impl Wire for HttpWire {
    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn post(&self, body: Vec<u8>) -> Result<WireReply, Error> {
        trace!(endpoint = %self.endpoint, bytes = body.len(), "posting request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .body(body)
            .send()
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(map_reqwest_error)?.to_vec();

        trace!(status, bytes = body.len(), "received reply");
        Ok(WireReply { status, body })
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

fn apply_tls(
    mut client_builder: reqwest::blocking::ClientBuilder,
    tls: &TlsConfig,
) -> Result<reqwest::blocking::ClientBuilder, Error> {
    if tls.skip_verification {
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    if let Some(ref ca_cert_file) = tls.ca_cert_file {
        let cert_pem = std::fs::read(ca_cert_file).map_err(|e| {
            Error::configuration(format!(
                "Failed to read certificate {:?}: {}",
                ca_cert_file, e
            ))
            .with_source(e)
        })?;
        let cert = reqwest::Certificate::from_pem(&cert_pem).map_err(|e| {
            Error::configuration(format!("Invalid certificate {:?}: {}", ca_cert_file, e))
                .with_source(e)
        })?;
        client_builder = client_builder.add_root_certificate(cert);
    }

    if let Some(ref ca_cert_pem) = tls.ca_cert_pem {
        let cert = reqwest::Certificate::from_pem(ca_cert_pem.as_bytes()).map_err(|e| {
            Error::configuration(format!("Invalid CA certificate PEM: {}", e)).with_source(e)
        })?;
        client_builder = client_builder.add_root_certificate(cert);
    }

    Ok(client_builder)
}

/// Maps reqwest errors to transport errors, keeping the cause.
fn map_reqwest_error(e: reqwest::Error) -> Error {
    let message = if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_body() || e.is_decode() {
        format!("Failed to read reply: {}", e)
    } else {
        format!("HTTP error: {}", e)
    };
    Error::transport(message).with_source(e)
}
