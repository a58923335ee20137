//! Batched transport over HTTP.

use getresponse::{ContactQuery, ErrorKind, Outcome};
use serde_json::json;
use wiremock::ResponseTemplate;

use crate::common::{API_KEY, batched, blocking, received_bodies, respond, start_server};

#[tokio::test(flavor = "multi_thread")]
async fn test_batch_with_partial_failure() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            {"result": {"C1": {"name": "news"}}},
            {"error": {"message": "Invalid campaign", "code": -1}}
        ])),
    )
    .await;

    let uri = server.uri();
    let (campaigns, contacts, outcomes) = blocking(move || {
        let client = batched(&uri);
        client.batch();
        let campaigns = client.get_campaigns(None).unwrap();
        let contacts = client
            .get_contacts(&ContactQuery::new().with_campaigns(["missing"]))
            .unwrap();
        (campaigns, contacts, client.send().unwrap())
    })
    .await;

    let outcomes = outcomes.expect("exchange should succeed");
    assert_eq!(outcomes.len(), 2);
    assert_eq!(
        outcomes[campaigns.position()],
        Outcome::Success(json!({"C1": {"name": "news"}}))
    );

    let fault = outcomes[contacts.position()].fault().expect("second call fails");
    assert_eq!(fault.message(), "Invalid campaign");
    assert_eq!(fault.code(), Some(-1));
    assert_eq!(
        fault.payload(),
        &json!({"message": "Invalid campaign", "code": -1})
    );

    let bodies = received_bodies(&server).await;
    assert_eq!(
        bodies,
        vec![json!([
            {"method": "get_campaigns", "params": [API_KEY]},
            {"method": "get_contacts", "params": [API_KEY, {"campaigns": ["missing"]}]}
        ])]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_fails_whole_batch() {
    let server = start_server().await;
    respond(&server, ResponseTemplate::new(500)).await;

    let uri = server.uri();
    let (outcomes, error, open) = blocking(move || {
        let client = batched(&uri);
        client.batch().ping().unwrap();
        client.get_account_info().unwrap();
        let outcomes = client.send().unwrap();
        (outcomes, client.error(), client.is_open())
    })
    .await;

    assert!(outcomes.is_none());
    assert!(error.unwrap().contains("500"));
    assert!(!open);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_length_mismatch_fails_whole_batch() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([{"result": {}}])),
    )
    .await;

    let uri = server.uri();
    let (outcomes, error) = blocking(move || {
        let client = batched(&uri);
        client.batch().ping().unwrap();
        client.ping().unwrap();
        (client.send().unwrap(), client.error())
    })
    .await;

    assert!(outcomes.is_none());
    assert!(error.unwrap().contains("1 items for 2 calls"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_array_reply_fails_whole_batch() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": {}})),
    )
    .await;

    let uri = server.uri();
    let (outcomes, error) = blocking(move || {
        let client = batched(&uri);
        client.batch().ping().unwrap();
        (client.send().unwrap(), client.error())
    })
    .await;

    assert!(outcomes.is_none());
    assert!(error.is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_calls_outside_batch_are_rejected() {
    let server = start_server().await;

    let uri = server.uri();
    let (call, flush) = blocking(move || {
        let client = batched(&uri);
        (client.ping().unwrap_err(), client.send().unwrap_err())
    })
    .await;

    assert_eq!(call.kind(), ErrorKind::State);
    assert_eq!(flush.kind(), ErrorKind::State);
    assert!(received_bodies(&server).await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reopened_batch_starts_empty() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([{"result": {"ping": "pong"}}])),
    )
    .await;

    let uri = server.uri();
    let outcomes = blocking(move || {
        let client = batched(&uri);
        client.batch().get_webforms().unwrap();
        client.get_account_info().unwrap();

        // Reopening drops the two calls above
        let slot = client.batch().ping().unwrap();
        assert_eq!(slot.position(), 0);

        let outcomes = client.send().unwrap();
        assert!(client.send().is_err());
        outcomes
    })
    .await;

    assert_eq!(outcomes.unwrap()[0].payload(), &json!({"ping": "pong"}));
    let bodies = received_bodies(&server).await;
    assert_eq!(bodies, vec![json!([{"method": "ping", "params": [API_KEY]}])]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_batch_skips_network() {
    let server = start_server().await;

    let uri = server.uri();
    let (outcomes, open) = blocking(move || {
        let client = batched(&uri);
        client.batch();
        (client.send().unwrap(), client.is_open())
    })
    .await;

    assert_eq!(outcomes, Some(Vec::new()));
    assert!(!open);
    assert!(received_bodies(&server).await.is_empty());
}
