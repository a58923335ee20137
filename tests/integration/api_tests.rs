//! Convenience operations over HTTP.

use getresponse::{NewContact, SubscribeAction, TextFilter};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{API_KEY, blocking, received_bodies, respond, single, start_server};

#[tokio::test(flavor = "multi_thread")]
async fn test_add_contact() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": {"queued": 1}})),
    )
    .await;

    let uri = server.uri();
    let result = blocking(move || {
        let contact = NewContact::new("C1", "ann@example.com")
            .with_name("Ann")
            .with_action(SubscribeAction::Insert)
            .with_custom("source", "web");
        single(&uri).add_contact(&contact)
    })
    .await
    .unwrap();

    assert_eq!(result, json!({"queued": 1}));
    assert_eq!(
        received_bodies(&server).await,
        vec![json!({
            "method": "add_contact",
            "params": [API_KEY, {
                "campaign": "C1",
                "action": "insert",
                "email": "ann@example.com",
                "cycle_day": 0,
                "name": "Ann",
                "customs": [{"name": "source", "content": "web"}]
            }]
        })]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_campaign_filter() {
    let server = start_server().await;
    respond(&server, ResponseTemplate::new(200).set_body_json(json!({"result": {}}))).await;

    let uri = server.uri();
    blocking(move || single(&uri).get_campaigns(Some(&TextFilter::contains("news"))))
        .await
        .unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies[0]["params"][1], json!({"name": {"CONTAINS": "%news%"}}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_campaign_id_by_name() {
    let server = start_server().await;
    respond(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": {"C9": {"name": "news"}}})),
    )
    .await;

    let uri = server.uri();
    let id = blocking(move || single(&uri).get_campaign_id_by_name("news"))
        .await
        .unwrap();
    assert_eq!(id.as_deref(), Some("C9"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_webforms_with_campaigns() {
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "get_webforms"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"W1": {"name": "signup", "campaign": "C1"}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "get_campaign"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"C1": {"name": "news"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let forms = blocking(move || single(&uri).get_webforms_with_campaigns())
        .await
        .unwrap();

    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].webform_id, "W1");
    assert_eq!(forms[0].campaign, Some(json!({"name": "news"})));
}
