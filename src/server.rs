use anyhow::{Context, Result};
use axum::{routing::{any, get}, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api_doc::ApiDoc;
use crate::dispatch::dispatch_handler;
use crate::handlers::health_handler;
use crate::routes;
use crate::state::AppState;

/// Build the router shared by the Lambda and local run modes
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::ITEMS, any(dispatch_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::OPENAPI, get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve requests until the runtime or listener stops
///
/// Inside Lambda the router is driven by the Lambda runtime, which turns
/// API Gateway events into HTTP requests. Everywhere else it listens on
/// the configured host and port.
pub async fn run(state: AppState) -> Result<()> {
    let config = state.config.clone();
    let app = app(state);

    if config.is_lambda() {
        tracing::info!("Starting Lambda runtime");
        return lambda_http::run(app)
            .await
            .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e));
    }

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
