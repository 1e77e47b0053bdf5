//! API integration tests
//!
//! Each test serves the real router on an ephemeral port and talks to it
//! over HTTP.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use library_server::{
    api, config::AppConfig, repository::InMemoryBookStore, services::Services, AppState,
};

/// Start a server with an empty catalog and return its API base URL
async fn spawn_server() -> String {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Arc::new(InMemoryBookStore::new()))),
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, api::router(state))
            .await
            .expect("Server error");
    });

    format!("http://{}/api/v1", addr)
}

async fn add_book(client: &Client, base_url: &str, title: &str) -> Value {
    let response = client
        .post(format!("{}/books", base_url))
        .json(&json!({ "title": title }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_book_lifecycle() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let a = add_book(&client, &base_url, "A").await;
    assert_eq!(a["data"]["id"], 1);
    let b = add_book(&client, &base_url, "B").await;
    assert_eq!(b["data"]["id"], 2);

    let body: Value = client
        .get(format!("{}/books?page_number=1&page_size=10", base_url))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let ids: Vec<i64> = body["data"]
        .as_array()
        .expect("Page is not an array")
        .iter()
        .filter_map(|b| b["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 2]);

    let response = client
        .put(format!("{}/books/1", base_url))
        .json(&json!({ "title": "A2", "author": "Anonymous" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = client
        .get(format!("{}/books/1", base_url))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["title"], "A2");
    assert_eq!(body["data"]["author"], "Anonymous");

    let response = client
        .delete(format!("{}/books/2", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/books/2", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not found");

    let body: Value = client
        .get(format!("{}/books", base_url))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let requests: Vec<_> = (0..20)
        .map(|i| {
            let client = client.clone();
            let base_url = base_url.clone();
            tokio::spawn(async move { add_book(&client, &base_url, &format!("B{}", i)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for request in requests {
        let body = request.await.expect("Task panicked");
        ids.push(body["data"]["id"].as_i64().expect("No id in response"));
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_client_error());
}
