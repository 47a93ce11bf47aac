/*
 * Responsibility
 * - GET / (reports which APP_VERSION this instance runs, for rolling updates)
 */
use axum::{Json, extract::State};

use crate::{api::dto::index::IndexResponse, state::AppState};

pub const DEFAULT_VERSION: &str = "1.0.0";

pub async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    let version = state
        .env
        .get("APP_VERSION")
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

    tracing::info!(%version, "request received at /");

    Json(IndexResponse::new(version))
}
