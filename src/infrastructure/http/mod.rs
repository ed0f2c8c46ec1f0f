pub mod request_id;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, page, translate::TranslateController};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Uploads above this size are rejected before extraction
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router with all routes configured
pub fn build_router(translate_controller: Arc<TranslateController>) -> Router {
    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .with_state(translate_controller)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health::health))
        .merge(translate_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    translate_controller: Arc<TranslateController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(translate_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
