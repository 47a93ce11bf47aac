/*
 * Responsibility
 * - Router-level middleware (request id, access log, response headers)
 */
pub mod http;
pub mod security_headers;
