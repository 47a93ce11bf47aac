/*
 * Responsibility
 * - Response body of GET /
 */
use serde::Serialize;

pub const INDEX_MESSAGE: &str = "SaaS Platform v2 - API is Running";

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: String,
}

impl IndexResponse {
    pub fn new(version: String) -> Self {
        Self {
            message: INDEX_MESSAGE,
            version,
        }
    }
}
