/*
 * Responsibility
 * - tracing / panic hook setup
 * - Config load -> AppState -> Router assembly
 * - Middleware application (request id, access log, response headers)
 * - axum::serve() with graceful shutdown
 */
use std::{panic, process, sync::Arc};

use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::AppError;
use crate::services::env_source::ProcessEnv;
use crate::shutdown::shutdown_signal;
use crate::state::AppState;
use crate::{api, middleware};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

fn init_tracing() {
    // RUST_LOG wins when set, e.g.
    // RUST_LOG=info,saas_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process. Production: default hook only.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<(), AppError> {
    init_tracing();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "refusing to start");
    })?;
    init_panic_hook(!config.app_env.is_production());

    let state = AppState::new(Arc::new(ProcessEnv));
    let app = build_router(state);

    tracing::info!(
        port = config.port,
        app_env = ?config.app_env,
        "starting application on port {}",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: config.addr,
            source,
        })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let router = api::routes().with_state(state);
    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router)
}
