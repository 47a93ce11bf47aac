/*
 * Responsibility
 * - Collaborators injected into AppState
 */
pub mod env_source;
