// ABOUTME: HTTP server assembly and lifecycle
// ABOUTME: Connects the pool, verifies the database, then serves the person API

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::Request,
    http::{HeaderValue, Method},
    Router, ServiceExt,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};
use tracing::info;

use roster_api::{create_router, AppState};
use roster_storage::{PersonStore, PgPersonStorage};

use crate::config::Config;

/// Wrap the API router with request tracing, optional CORS and trailing-slash trimming
pub fn build_app(
    state: AppState,
    cors_origin: Option<&str>,
) -> anyhow::Result<NormalizePath<Router>> {
    let mut router = create_router(state).layer(TraceLayer::new_for_http());

    if let Some(origin) = cors_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid CORS origin: {}", origin))?;

        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);
        router = router.layer(cors);
    }

    Ok(NormalizePath::trim_trailing_slash(router))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database: {:?}", config.database);

    let pool = config.database.connect();
    let storage = PgPersonStorage::new(pool.clone());

    storage.ping().await.context("Database not reachable")?;
    info!("Successfully connected to database");

    let app = build_app(
        AppState::new(Arc::new(storage)),
        config.cors_origin.as_deref(),
    )?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
