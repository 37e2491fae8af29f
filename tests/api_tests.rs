//! API integration tests, driving the real router in-process

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use lms_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

fn test_app() -> Router {
    let state = AppState {
        config: Arc::new(AppConfig {
            server: Default::default(),
            logging: Default::default(),
        }),
        services: Arc::new(Services::new(Repository::new())),
    };
    api::create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("Failed to build request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response body")
    };
    (status, body)
}

fn harry_potter() -> Value {
    json!({
        "isbn": "123",
        "title": "Harry Potter",
        "author": "J. K. Rowling",
        "publicationYear": 1997,
        "availableCopies": 1
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog"], "in-memory");
}

#[tokio::test]
async fn test_readiness_check() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["catalog"], "in-memory");
}

#[tokio::test]
async fn test_add_and_find_book() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/book/add", Some(harry_potter())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isbn"], "123");
    assert_eq!(body["publicationYear"], 1997);
    assert_eq!(body["availableCopies"], 1);

    let (status, body) = send(&app, Method::GET, "/book/find?isbn=123", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Harry Potter");
}

#[tokio::test]
async fn test_add_book_invalid_payload() {
    let app = test_app();

    let mut book = harry_potter();
    book["availableCopies"] = json!(0);
    let (status, body) = send(&app, Method::POST, "/book/add", Some(book)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidEntry");

    let mut book = harry_potter();
    book["title"] = json!("");
    let (status, _) = send(&app, Method::POST, "/book/add", Some(book)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_duplicate_book() {
    let app = test_app();

    let (status, _) = send(&app, Method::POST, "/book/add", Some(harry_potter())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, "/book/add", Some(harry_potter())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Duplicate");
}

#[tokio::test]
async fn test_find_requires_exactly_one_parameter() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/book/find", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::GET,
        "/book/find?isbn=123&author=J.%20K.%20Rowling",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_find_by_unknown_author_returns_empty_list() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/book/find?author=Stan%20Lee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_find_by_author_lists_books_in_order() {
    let app = test_app();

    let mut first = harry_potter();
    first["isbn"] = json!("111");
    let mut second = harry_potter();
    second["isbn"] = json!("222");
    send(&app, Method::POST, "/book/add", Some(first)).await;
    send(&app, Method::POST, "/book/add", Some(second)).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/book/find?author=J.%20K.%20Rowling",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let isbns: Vec<_> = body
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|b| b["isbn"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(isbns, vec!["111", "222"]);
}

#[tokio::test]
async fn test_borrow_depletion_and_return() {
    let app = test_app();
    send(&app, Method::POST, "/book/add", Some(harry_potter())).await;

    let (status, body) = send(&app, Method::PUT, "/book/borrow?isbn=123", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["availableCopies"], 0);

    let (status, body) = send(&app, Method::PUT, "/book/borrow?isbn=123", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "NotAvailable");

    let (status, body) = send(&app, Method::PUT, "/book/return?isbn=123", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["availableCopies"], 1);
}

#[tokio::test]
async fn test_unknown_isbn_maps_to_bad_request() {
    let app = test_app();

    for (method, uri) in [
        (Method::GET, "/book/find?isbn=missing"),
        (Method::DELETE, "/book/remove?isbn=missing"),
        (Method::PUT, "/book/borrow?isbn=missing"),
        (Method::PUT, "/book/return?isbn=missing"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "NoSuchBook");
    }
}

#[tokio::test]
async fn test_remove_book() {
    let app = test_app();
    send(&app, Method::POST, "/book/add", Some(harry_potter())).await;

    let (status, body) = send(&app, Method::DELETE, "/book/remove?isbn=123", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isbn"], "123");

    let (status, _) = send(&app, Method::GET, "/book/find?isbn=123", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
