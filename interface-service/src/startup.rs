//! Application startup and lifecycle management.
//!
//! Builds the language-model client exactly once, wires it into shared state,
//! and serves the route group behind CORS, tracing and request-id layers.

use crate::config::InterfaceConfig;
use crate::routes::main_routes;
use crate::services::{CohereClient, LanguageModel};
use axum::{middleware::from_fn, Router};
use service_core::error::AppError;
use service_core::middleware::tracing::{make_request_span, request_id_middleware};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: InterfaceConfig,
    pub llm: Arc<dyn LanguageModel>,
}

impl AppState {
    pub fn new(config: InterfaceConfig, llm: Arc<dyn LanguageModel>) -> Self {
        Self { config, llm }
    }
}

/// Any origin, any method, any request header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(main_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(cors_layer())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: InterfaceConfig) -> Result<Self, AppError> {
        let client = CohereClient::new(&config.cohere).map_err(|e| {
            tracing::error!("Failed to construct Cohere client: {}", e);
            AppError::InternalError(anyhow::Error::new(e))
        })?;

        tracing::info!(base_url = %client.base_url(), "Initialized Cohere client");

        Self::build_with(config, Arc::new(client)).await
    }

    /// Build around an already constructed client.
    pub async fn build_with(
        config: InterfaceConfig,
        llm: Arc<dyn LanguageModel>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            provider = llm.name(),
            "Interface service: HTTP on {}:{}",
            config.common.host,
            port
        );

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, llm),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the application until the process is stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Run the application until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
