//! Integration tests against a real listener.
//!
//! The Cohere client is constructed but never called, so no network access to
//! the Cohere API is needed.
//! Run with: cargo test -p interface-service --test startup_test

use interface_service::config::InterfaceConfig;
use interface_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    std::env::set_var("APP__HOST", "127.0.0.1");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("COHERE_API_KEY", "test-api-key");

    let config = InterfaceConfig::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn root_returns_greeting_over_http() {
    let port = spawn_app().await;
    let client = Client::builder().no_proxy().build().unwrap();

    let response = client
        .get(format!("http://127.0.0.1:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        serde_json::json!({ "message": "Hello, Interface App Once a Day!" })
    );
}

#[tokio::test]
async fn cross_origin_request_is_allowed_over_http() {
    let port = spawn_app().await;
    let client = Client::builder().no_proxy().build().unwrap();

    let response = client
        .get(format!("http://127.0.0.1:{}/?q=1", port))
        .header("Origin", "https://app.example.org")
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn unknown_path_is_not_found_over_http() {
    let port = spawn_app().await;
    let client = Client::builder().no_proxy().build().unwrap();

    let response = client
        .get(format!("http://127.0.0.1:{}/missing", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn each_application_binds_its_own_port() {
    let first = spawn_app().await;
    let second = spawn_app().await;

    assert_ne!(first, 0);
    assert_ne!(first, second);
}
