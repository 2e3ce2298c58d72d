pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    health::{self, HealthState},
    tts::TtsController,
};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn build_router(
    config: &Config,
    health_state: Arc<HealthState>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let tts_routes = Router::new()
        .route("/api/tts/voices", get(TtsController::voices))
        .route("/api/tts/synthesize", post(TtsController::synthesize))
        .route("/api/tts/download", post(TtsController::download))
        // Download bodies carry whole base64 clips, well past axum's 2 MB default
        .layer(DefaultBodyLimit::max(config.max_request_bytes))
        .with_state(tts_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(health_state)
        .merge(tts_routes);

    // Browser front-ends are served from a different origin during development
    let app = if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    app.layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    health_state: Arc<HealthState>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, health_state, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
