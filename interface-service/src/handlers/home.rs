use axum::Json;
use serde::Serialize;

pub const GREETING: &str = "Hello, Interface App Once a Day!";

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

/// Static greeting. Ignores query, headers and body.
pub async fn home() -> Json<GreetingResponse> {
    Json(GreetingResponse { message: GREETING })
}
