//! The `User-Agent` sent with every JSON-RPC POST.
//!
//! GetResponse sees one endpoint and one method name per call, so this
//! header is the only place a request says which client build sent it.

use std::sync::OnceLock;

const CLIENT_NAME: &str = "getresponse-rust";
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Header value set on the reqwest client by [`HttpWire`](crate::HttpWire),
/// e.g. `getresponse-rust/0.1.0 (rust/1.92; linux/x86_64)`.
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "{}/{} ({}; {}/{})",
            CLIENT_NAME,
            CLIENT_VERSION,
            rust_version(),
            os_name(),
            std::env::consts::ARCH,
        )
    })
}

fn rust_version() -> &'static str {
    concat!("rust/", env!("CARGO_PKG_RUST_VERSION"))
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        os => os,
    }
}
