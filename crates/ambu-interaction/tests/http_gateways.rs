use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use ambu_core::AmbuError;
use ambu_core::auth::{AuthGateway, CredentialForm};
use ambu_core::search::{Engine, LookupGateway, SearchRequest, SearchResult, classify};
use ambu_interaction::{Endpoint, HttpAuthGateway, HttpLookupGateway};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::json;

async fn token_handler(Form(form): Form<HashMap<String, String>>) -> Response {
    let username = form.get("username").cloned().unwrap_or_default();
    let password = form.get("password").cloned().unwrap_or_default();

    match (username.as_str(), password.as_str()) {
        ("mario", "secret") => {
            Json(json!({"access_token": "abc", "token_type": "bearer"})).into_response()
        }
        ("flood", _) => StatusCode::TOO_MANY_REQUESTS.into_response(),
        ("boom", _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ("broken", _) => (StatusCode::OK, "<html>not json</html>").into_response(),
        ("blank", _) => Json(json!({"access_token": ""})).into_response(),
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn search_handler(Query(params): Query<HashMap<String, String>>) -> Response {
    let query = params.get("query").cloned().unwrap_or_default();
    let engine = params.get("engine").cloned().unwrap_or_default();

    match query.as_str() {
        "pizza margherita" => {
            Json(json!({"query": query, "phone_number": "Off-Topic", "source": "Validation"}))
                .into_response()
        }
        "studio fantasma" => {
            Json(json!({"query": query, "phone_number": "Not Found", "source": "Not Found", "details": []}))
                .into_response()
        }
        "down" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        "garbled" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({"phone_number": "Not Found"})).into_response()
        }
        _ => Json(json!({
            "query": query,
            "phone_number": "+39 02 1234567",
            "source": format!("engine={engine}"),
            "details": [
                {"url": "https://a.example", "phone": "+39 02 1234567", "method": "Regex"},
                {"url": "https://b.example", "phone": "02 7654321", "method": "Regex"}
            ]
        }))
        .into_response(),
    }
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/token", post(token_handler))
        .route("/search", get(search_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

fn endpoint(addr: SocketAddr) -> Endpoint {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(500))
        .build()
        .expect("client");
    Endpoint::new(client, format!("http://{addr}"))
}

/// An address nothing listens on.
async fn dead_address() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

#[tokio::test]
async fn test_token_success_returns_grant() {
    let gateway = HttpAuthGateway::new(endpoint(spawn_server().await));
    let grant = gateway
        .exchange(&CredentialForm::new("mario", "secret"))
        .await
        .expect("login should succeed");
    assert_eq!(grant.access_token, "abc");
}

#[tokio::test]
async fn test_token_username_is_sanitized_before_sending() {
    let gateway = HttpAuthGateway::new(endpoint(spawn_server().await));
    let grant = gateway
        .exchange(&CredentialForm::new("<b>mario</b>", "secret"))
        .await
        .expect("sanitized username should be accepted");
    assert_eq!(grant.access_token, "abc");
}

#[tokio::test]
async fn test_token_status_classification() {
    let gateway = HttpAuthGateway::new(endpoint(spawn_server().await));

    let invalid = gateway.exchange(&CredentialForm::new("mario", "wrong")).await;
    assert_eq!(invalid.unwrap_err(), AmbuError::AuthInvalid);

    let limited = gateway.exchange(&CredentialForm::new("flood", "x")).await;
    assert_eq!(limited.unwrap_err(), AmbuError::AuthRateLimited);

    let server_error = gateway.exchange(&CredentialForm::new("boom", "x")).await;
    assert!(matches!(server_error, Err(AmbuError::AuthGeneric(_))));
}

#[tokio::test]
async fn test_token_unusable_body_is_generic() {
    let gateway = HttpAuthGateway::new(endpoint(spawn_server().await));

    let broken = gateway.exchange(&CredentialForm::new("broken", "x")).await;
    assert!(matches!(broken, Err(AmbuError::AuthGeneric(_))));

    let blank = gateway.exchange(&CredentialForm::new("blank", "x")).await;
    assert!(matches!(blank, Err(AmbuError::AuthGeneric(_))));
}

#[tokio::test]
async fn test_token_unreachable_server_is_network_failure() {
    let gateway = HttpAuthGateway::new(endpoint(dead_address().await));
    let result = gateway.exchange(&CredentialForm::new("mario", "secret")).await;
    assert!(matches!(result, Err(AmbuError::NetworkFailure(_))));
}

#[tokio::test]
async fn test_search_encodes_query_and_engine() {
    let gateway = HttpLookupGateway::new(endpoint(spawn_server().await));
    let request = SearchRequest::new("Studio Dentistico Rossi & Figli", Engine::Deepsearch).unwrap();

    let payload = gateway.lookup(&request).await.expect("lookup should succeed");
    match classify(payload) {
        SearchResult::Found {
            query_echo,
            phone_number,
            primary_source,
            details,
        } => {
            assert_eq!(query_echo, "Studio Dentistico Rossi & Figli");
            assert_eq!(phone_number, "+39 02 1234567");
            assert_eq!(primary_source, "engine=deepsearch");
            assert_eq!(details.len(), 2);
        }
        other => panic!("Expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_sentinels_classify() {
    let gateway = HttpLookupGateway::new(endpoint(spawn_server().await));

    let off_topic = gateway
        .lookup(&SearchRequest::new("pizza margherita", Engine::Local).unwrap())
        .await
        .unwrap();
    assert_eq!(classify(off_topic), SearchResult::OffTopic);

    let not_found = gateway
        .lookup(&SearchRequest::new("studio fantasma", Engine::Local).unwrap())
        .await
        .unwrap();
    assert_eq!(classify(not_found), SearchResult::NotFound);
}

#[tokio::test]
async fn test_search_failures() {
    let gateway = HttpLookupGateway::new(endpoint(spawn_server().await));

    let down = gateway
        .lookup(&SearchRequest::new("down", Engine::Local).unwrap())
        .await;
    assert!(matches!(down, Err(AmbuError::SearchGeneric(_))));

    let garbled = gateway
        .lookup(&SearchRequest::new("garbled", Engine::Local).unwrap())
        .await;
    assert!(matches!(garbled, Err(AmbuError::SearchGeneric(_))));

    let slow = gateway
        .lookup(&SearchRequest::new("slow", Engine::Local).unwrap())
        .await;
    assert!(matches!(slow, Err(AmbuError::NetworkFailure(_))));
}

#[tokio::test]
async fn test_search_unreachable_server_is_network_failure() {
    let gateway = HttpLookupGateway::new(endpoint(dead_address().await));
    let result = gateway
        .lookup(&SearchRequest::new("Studio Verdi", Engine::Local).unwrap())
        .await;
    assert!(matches!(result, Err(AmbuError::NetworkFailure(_))));
}
