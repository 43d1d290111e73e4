//! Tests for KybClient against the merchant application endpoints.

use idm_client::{Application, ApiConfig, Credentials, IdentityMindClient, Params};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> IdentityMindClient {
    let config = ApiConfig::local_mock(&mock_server.uri(), Credentials::basic("u", "p")).unwrap();
    IdentityMindClient::new(config).unwrap()
}

fn params(value: Value) -> Params {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn submit_application_posts_to_merchant_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/im/account/merchant"))
        .and(query_param("graphScoreResponse", "false"))
        .and(body_json(json!({"businessName": "Acme LLC"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mtid": "k-1", "state": "R"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client
        .kyb()
        .submit_application(&params(json!({"businessName": "Acme LLC"})))
        .await
        .unwrap();
    let application: Application = resp.parse().unwrap();
    assert!(application.is_under_review());
}

#[tokio::test]
async fn get_application_uses_merchant_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/im/account/merchant/k-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mtid": "k-1", "state": "A"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let application: Application = client.kyb().get_application("k-1").await.unwrap().parse().unwrap();
    assert!(application.is_accepted());
}

#[tokio::test]
async fn reevaluate_application_posts_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/im/account/merchant/k-1"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mtid": "k-1", "state": "D"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let application: Application = client
        .kyb()
        .reevaluate_application("k-1")
        .await
        .unwrap()
        .parse()
        .unwrap();
    assert!(application.is_rejected());
}

#[tokio::test]
async fn documents_stay_under_merchant_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/im/account/merchant/k-1/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "d-1"}])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/im/account/merchant/k-1/files/d-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "d-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/im/account/merchant/k-1/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "uploaded"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/im/account/merchant/k-1/dv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"dv": "queued"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let kyb = client.kyb();

    assert_eq!(kyb.list_documents("k-1").await.unwrap().body[0]["id"], "d-1");
    assert_eq!(kyb.download_document("k-1", "d-1").await.unwrap().body["id"], "d-1");

    let upload = params(json!({"articles": "data:application/pdf;base64,JVBERi0="}));
    assert_eq!(
        kyb.upload_document("k-1", &upload).await.unwrap().body["status"],
        "uploaded"
    );
    assert_eq!(
        kyb.upload_verification_image("k-1", &upload).await.unwrap().body["dv"],
        "queued"
    );
}

#[tokio::test]
async fn decision_endpoints_post_feedback() {
    let mock_server = MockServer::start().await;

    for decision in ["accepted", "rejected", "review"] {
        Mock::given(method("POST"))
            .and(path(format!("/im/account/merchant/k-9/{decision}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"decision": decision})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = test_client(&mock_server);
    let empty = Params::new();

    let resp = client.kyb().approve_application("k-9", &empty).await.unwrap();
    assert_eq!(resp.body["decision"], "accepted");
    let resp = client.kyb().reject_application("k-9", &empty).await.unwrap();
    assert_eq!(resp.body["decision"], "rejected");
    let resp = client.kyb().undecide_application("k-9", &empty).await.unwrap();
    assert_eq!(resp.body["decision"], "review");
}
