/*
 * Responsibility
 * - URL layout of the service: /, /health, /config (GET only)
 */
use axum::{Router, routing::get};

use crate::api::handlers::{config::config_dump, health::health, index::index};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/config", get(config_dump))
}
