//! Certificate trust for `https` endpoints.

use std::path::PathBuf;

/// Which server certificates the HTTP exchange trusts.
///
/// Leaving everything unset trusts the bundled web roots, which is what the
/// public GetResponse endpoint needs. A private root is only useful when the
/// endpoint is reached through an intercepting proxy or a local stand-in.
/// Settings have no effect on `http` endpoints.
///
/// ```rust
/// use getresponse::TlsConfig;
///
/// let proxy_root = TlsConfig::builder()
///     .ca_cert_file("/etc/ssl/proxy-root.pem")
///     .build();
/// assert!(proxy_root.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// PEM file holding an extra root certificate.
    #[builder(into)]
    pub ca_cert_file: Option<PathBuf>,

    /// Extra root certificate as PEM text.
    #[builder(into)]
    pub ca_cert_pem: Option<String>,

    /// Accept any server certificate.
    ///
    /// **WARNING**: anyone on the path can then read the API key.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Trusts any server certificate. For local stand-ins only.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }

    /// Returns `true` if an extra root certificate was supplied.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }
}
