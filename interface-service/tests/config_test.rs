//! Startup configuration tests.
//!
//! Kept in a single test so nothing else in this binary touches the
//! environment concurrently.

use interface_service::config::InterfaceConfig;
use interface_service::startup::Application;
use secrecy::ExposeSecret;
use service_core::error::AppError;

#[tokio::test]
async fn credential_is_required_before_listening() {
    std::env::set_var("APP__HOST", "127.0.0.1");
    std::env::set_var("APP__PORT", "0");
    std::env::remove_var("COHERE_BASE_URL");
    std::env::remove_var("COHERE_TIMEOUT_SECS");

    std::env::remove_var("COHERE_API_KEY");
    let err = InterfaceConfig::load().expect_err("missing key must fail");
    assert!(matches!(err, AppError::ConfigError(_)));
    assert!(err.to_string().contains("COHERE_API_KEY"));

    std::env::set_var("COHERE_API_KEY", "");
    assert!(InterfaceConfig::load().is_err());

    std::env::set_var("COHERE_API_KEY", "co-live-key");
    std::env::set_var("COHERE_TIMEOUT_SECS", "soon");
    assert!(InterfaceConfig::load().is_err());
    std::env::remove_var("COHERE_TIMEOUT_SECS");

    std::env::set_var("COHERE_BASE_URL", "http://localhost:8089/");
    let config = InterfaceConfig::load().expect("key is set");
    assert_eq!(config.cohere.api_key.expose_secret(), "co-live-key");
    assert_eq!(config.cohere.base_url, "http://localhost:8089");
    assert_eq!(config.common.port, 0);

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    assert_ne!(app.port(), 0);
    assert_eq!(app.state().llm.name(), "cohere");
}
