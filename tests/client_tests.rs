use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zoop_api::{ApiError, ApiKey, MarketplaceId, ZoopClient, ZoopConfig};

fn test_config(server: &MockServer) -> ZoopConfig {
    ZoopConfig::builder()
        .api_key(ApiKey::new("zpk_test_abc").unwrap())
        .marketplace_id(MarketplaceId::new("mkt_123").unwrap())
        .endpoint(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_decodes_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/marketplaces/mkt_123/buyers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resource": "list",
            "items": []
        })))
        .mount(&server)
        .await;

    let client = ZoopClient::new(&test_config(&server));
    let value = assert_ok!(client.get("v1/marketplaces/mkt_123/buyers").await);

    assert_eq!(value["resource"], "list");
}

#[tokio::test]
async fn test_user_agent_prefix_is_prepended() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .and(header("user-agent", "MyApp/1.0 | ZoopRustSDK/0.1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ZoopConfig::builder()
        .api_key(ApiKey::new("zpk_test_abc").unwrap())
        .marketplace_id(MarketplaceId::new("mkt_123").unwrap())
        .endpoint(server.uri())
        .user_agent_prefix("MyApp/1.0")
        .build()
        .unwrap();
    let client = ZoopClient::new(&config);

    client.get("v1/ping").await.unwrap();
}

#[tokio::test]
async fn test_put_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/marketplaces/mkt_123/bank_accounts/ba_1"))
        .and(wiremock::matchers::body_partial_json(json!({
            "holder_name": "Ana Silva"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ba_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZoopClient::new(&test_config(&server));
    let value = client
        .put(
            "v1/marketplaces/mkt_123/bank_accounts/ba_1",
            json!({"holder_name": "Ana Silva"}),
        )
        .await
        .unwrap();

    assert_eq!(value["id"], "ba_1");
}

#[tokio::test]
async fn test_malformed_error_envelope_is_unexpected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<html>bad request</html>"))
        .mount(&server)
        .await;

    let client = ZoopClient::new(&test_config(&server));
    let err = client.get("v1/ping").await.unwrap_err();

    assert!(matches!(err, ApiError::Unexpected { source: Some(_) }));
}

#[tokio::test]
async fn test_connection_failure_is_unexpected() {
    let server = MockServer::start().await;
    let config = test_config(&server);
    drop(server);

    let client = ZoopClient::new(&config);
    let err = client.get("v1/ping").await.unwrap_err();

    assert!(matches!(err, ApiError::Unexpected { source: Some(_) }));
}
