//! End-to-end HTTP tests.
//!
//! Each test binds the real router to an ephemeral port and issues requests
//! with reqwest, exercising the full stack including middleware and
//! per-route response headers.
//!
//! Run with: cargo test --test http_tests

use greeter::config::{CACHE_CONTROL_HEALTH, GREETING_BODY, HEALTH_BODY};
use greeter::routes::create_router;

/// Serve the router on an ephemeral port and return the base URL.
async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, create_router())
            .await
            .expect("Server error");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn root_returns_greeting() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), GREETING_BODY);
}

#[tokio::test]
async fn root_sets_cache_control() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();

    let cache_control = response
        .headers()
        .get("cache-control")
        .expect("Missing Cache-Control header")
        .to_str()
        .unwrap();
    assert!(cache_control.contains("max-age="));
}

#[tokio::test]
async fn health_returns_ok() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        CACHE_CONTROL_HEALTH
    );
    assert_eq!(response.text().await.unwrap(), HEALTH_BODY);
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/foo", base)).await.unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn unsupported_method_returns_405() {
    let base = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client.post(format!("{}/", base)).send().await.unwrap();

    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn responses_are_idempotent() {
    let base = spawn_app().await;

    let first = reqwest::get(format!("{}/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let second = reqwest::get(format!("{}/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first, GREETING_BODY);
}
