/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone is cheap (Arc inside)
 */
use std::sync::Arc;

use crate::services::env_source::EnvSource;

#[derive(Clone, Debug)]
pub struct AppState {
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        Self { env }
    }
}
