/*
 * Responsibility
 * - GET /health (liveness/readiness probe)
 * - No state, no downstream checks: answers as long as the process serves HTTP
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::health::HealthResponse;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::HEALTHY))
}
