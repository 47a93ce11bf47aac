/*
 * Responsibility
 * - GET /config (dumps every environment variable to verify ConfigMap/Secret injection)
 *
 * Values are returned unfiltered, secrets included. Do not expose this route
 * outside a trusted network.
 */
use std::collections::BTreeMap;

use axum::{Json, extract::State};

use crate::state::AppState;

pub async fn config_dump(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.env.snapshot())
}
