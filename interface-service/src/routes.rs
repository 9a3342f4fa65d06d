//! Route group for the service, merged into the application by `startup`.

use crate::handlers::home::home;
use crate::startup::AppState;
use axum::{routing::get, Router};

pub fn main_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}
