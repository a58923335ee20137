//! Single-call transport over HTTP.

use std::time::Duration;

use getresponse::{Client, ErrorKind};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{API_KEY, blocking, received_bodies, respond, single, start_server};

#[tokio::test(flavor = "multi_thread")]
async fn test_execute_ping() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": {"ping": "pong"}})),
    )
    .await;

    let uri = server.uri();
    let result = blocking(move || single(&uri).execute("ping", None)).await;

    assert_eq!(result.unwrap(), json!({"ping": "pong"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ping_helper() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": {"ping": "pong"}})),
    )
    .await;

    let uri = server.uri();
    let pong = blocking(move || single(&uri).ping()).await.unwrap();
    assert_eq!(pong, "pong");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_request_shape() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "method": "get_campaign",
            "params": [API_KEY, {"campaign": "C1"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {"C1": {}}})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || single(&uri).get_campaign("C1")).await;
    assert_eq!(result.unwrap(), json!({"C1": {}}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_key_only_call_has_one_param() {
    let server = start_server().await;
    respond(&server, ResponseTemplate::new(200).set_body_json(json!({"result": {}}))).await;

    let uri = server.uri();
    blocking(move || single(&uri).get_account_info()).await.unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies, vec![json!({"method": "get_account_info", "params": [API_KEY]})]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_user_agent_is_sent() {
    let server = start_server().await;
    respond(&server, ResponseTemplate::new(200).set_body_json(json!({"result": 1}))).await;

    let uri = server.uri();
    blocking(move || single(&uri).execute("ping", None)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(user_agent.starts_with("getresponse-rust/"), "{}", user_agent);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remote_error() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"error": {"message": "Invalid API key", "code": 101}})),
    )
    .await;

    let uri = server.uri();
    let err = blocking(move || single(&uri).execute("ping", None))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.message(), "Invalid API key");
    assert_eq!(err.code(), Some(101));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_falsy_error_member_is_ignored() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": [], "error": null})),
    )
    .await;

    let uri = server.uri();
    let result = blocking(move || single(&uri).execute("get_webforms", None)).await;
    assert_eq!(result.unwrap(), json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_is_protocol_error() {
    let server = start_server().await;
    respond(&server, ResponseTemplate::new(500)).await;

    let uri = server.uri();
    let expected_endpoint = format!("{}/", server.uri());
    let err = blocking(move || single(&uri).execute("ping", None))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Protocol);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.endpoint(), Some(expected_endpoint.as_str()));
    assert!(err.to_string().contains("500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_content_is_null() {
    let server = start_server().await;
    respond(&server, ResponseTemplate::new(204)).await;

    let uri = server.uri();
    let result = blocking(move || single(&uri).delete_contact("X")).await;
    assert_eq!(result.unwrap(), Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_garbage_body_is_invalid_response() {
    let server = start_server().await;
    respond(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let uri = server.uri();
    let err = blocking(move || single(&uri).execute("ping", None))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_is_transport_error() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"result": {}}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let uri = server.uri();
    let err = blocking(move || {
        Client::builder()
            .api_key(API_KEY)
            .endpoint(uri)
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap()
            .execute("ping", None)
    })
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.message().contains("timed out"), "{}", err);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_endpoint_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = blocking(move || single(&uri).execute("ping", None))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_calls_are_independent() {
    let server = start_server().await;
    respond(&server, ResponseTemplate::new(200).set_body_json(json!({"result": {}}))).await;

    let uri = server.uri();
    blocking(move || {
        let client = single(&uri);
        client.get_campaigns(None)?;
        client.get_webforms()?;
        Ok::<_, getresponse::Error>(())
    })
    .await
    .unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies.len(), 2);
    assert!(bodies.iter().all(Value::is_object));
}
