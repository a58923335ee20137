//! Common test harness for integration tests.

use std::sync::Once;
use std::time::Duration;

use getresponse::{Batched, Client};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key every test client sends.
pub const API_KEY: &str = "test-api-key";

static TRACING: Once = Once::new();

/// Installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Starts a mock endpoint.
pub async fn start_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// Answers every POST to the endpoint root with `response`.
pub async fn respond(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Single-call client for the mock endpoint.
pub fn single(uri: &str) -> Client {
    Client::builder()
        .api_key(API_KEY)
        .endpoint(uri)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Batched client for the mock endpoint.
pub fn batched(uri: &str) -> Client<Batched> {
    Client::builder()
        .api_key(API_KEY)
        .endpoint(uri)
        .timeout(Duration::from_secs(5))
        .build_batched()
        .expect("client should build")
}

/// Runs blocking client code off the async runtime.
///
/// The blocking HTTP client must be created and dropped outside async
/// context, so `f` should build its own client.
pub async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// The JSON bodies the server received, in order.
pub async fn received_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.body_json().expect("request body should be JSON"))
        .collect()
}
