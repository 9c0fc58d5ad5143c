//! Integration tests for endpoint execution over `HyperTransport` using wiremock.

use courier::{ApiClient, Endpoint, Error, HyperTransport, Transport};
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

fn client() -> ApiClient<HyperTransport> {
    ApiClient::new(HyperTransport::new())
}

#[tokio::test]
async fn get_decodes_typed_response() {
    let mock_server = MockServer::start().await;

    let user = User {
        id: 1,
        name: "Alice".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::get(mock_server.uri(), "/users/1")
        .header("Accept", "application/json")
        .build();

    let fetched: User = client().send(&endpoint).await.expect("user");
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn get_params_are_sent_as_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": ["courier", "rustls"]
        })))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::get(mock_server.uri(), "/search")
        .param("q", "rust")
        .param("page", "1")
        .build();

    let body: serde_json::Value = client().send(&endpoint).await.expect("body");
    assert_eq!(body["results"][0], "courier");
}

#[tokio::test]
async fn plus_in_query_value_survives_decoding() {
    let mock_server = MockServer::start().await;

    // wiremock compares the percent-decoded value; q=a%2Bb must decode back
    // to "a+b", not to "a b".
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "a+b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::get(mock_server.uri(), "/search")
        .param("q", "a+b")
        .build();

    let body: serde_json::Value = client().send(&endpoint).await.expect("body");
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn post_params_are_sent_as_json_body() {
    let mock_server = MockServer::start().await;

    let created = User {
        id: 42,
        name: "Bob".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({"name": "Bob", "role": "dev"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::post(mock_server.uri(), "/users")
        .param("name", "Bob")
        .param("role", "dev")
        .build();

    let fetched: User = client().send(&endpoint).await.expect("user");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn put_params_are_sent_as_json_body() {
    let mock_server = MockServer::start().await;

    let updated = User {
        id: 1,
        name: "Updated".to_string(),
    };

    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .and(body_json(serde_json::json!({"name": "Updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::put(mock_server.uri(), "/users/1")
        .param("name", "Updated")
        .build();

    let fetched: User = client().send(&endpoint).await.expect("user");
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn status_401_maps_to_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/private"))
        .respond_with(ResponseTemplate::new(401).set_body_string("go away"))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::get(mock_server.uri(), "/private").build();

    let err = client()
        .send::<User>(&endpoint)
        .await
        .expect_err("expected unauthorized");
    assert!(err.is_unauthorized(), "got: {err}");
}

#[tokio::test]
async fn status_500_maps_to_unexpected_status_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::get(mock_server.uri(), "/broken").build();

    let err = client()
        .send::<User>(&endpoint)
        .await
        .expect_err("expected status error");
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.body().map(|b| b.as_ref()),
        Some(b"internal error".as_slice())
    );
}

#[tokio::test]
async fn mismatched_body_maps_to_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "not-a-number",
            "name": "Alice"
        })))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::get(mock_server.uri(), "/users/1").build();

    let err = client()
        .send::<User>(&endpoint)
        .await
        .expect_err("expected decode error");
    assert!(matches!(err, Error::Decode { .. }), "got: {err}");
}

#[tokio::test]
async fn delete_sends_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"deleted": true})))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::delete(mock_server.uri(), "/users/1")
        .param("force", "true")
        .build();

    let body: serde_json::Value = client().send(&endpoint).await.expect("body");
    assert_eq!(body["deleted"], true);
}

#[tokio::test]
async fn invalid_base_url_fails_without_network() {
    let endpoint = Endpoint::get("not a url", "/users").build();

    let err = client()
        .send::<User>(&endpoint)
        .await
        .expect_err("expected invalid URL");
    assert!(matches!(err, Error::InvalidUrl(_)), "got: {err}");
}

#[tokio::test]
async fn timeout_maps_to_timeout_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::with_config(
        courier::TransportConfig::builder()
            .timeout(std::time::Duration::from_millis(100))
            .build(),
    );
    let endpoint = Endpoint::get(mock_server.uri(), "/slow").build();

    let err = ApiClient::new(transport)
        .send::<User>(&endpoint)
        .await
        .expect_err("expected timeout");
    assert!(err.is_timeout(), "got: {err}");
}

#[tokio::test]
async fn connection_refusal_maps_to_connection_error() {
    let endpoint = Endpoint::get("http://127.0.0.1:1", "/users").build();

    let err = client()
        .send::<User>(&endpoint)
        .await
        .expect_err("expected connection error");
    assert!(err.is_connection(), "got: {err}");
}

#[tokio::test]
async fn transport_returns_raw_response_for_any_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-found"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "abc123")
                .set_body_string("Not Found"),
        )
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::get(mock_server.uri(), "/not-found").build();
    let request = endpoint.to_request().expect("request");

    let response = HyperTransport::new().send(request).await.expect("response");
    assert_eq!(response.status(), 404);
    assert!(response.is_client_error());
    assert_eq!(response.header("x-request-id"), Some("abc123"));
    assert_eq!(response.text().expect("text"), "Not Found");
}
