//! Retail Sales Dashboard API Server
//!
//! JSON-only surface between the aggregation/prediction core and any
//! rendering layer. Sessions, templates, and authentication live
//! outside this service.

mod config;
mod routes;

pub use config::AppConfig;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use inference_engine::Predictor;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Application state shared across handlers, read-only after startup
pub struct AppState {
    /// Loaded configuration
    pub config: AppConfig,
    /// Prediction gateway; `Unavailable` when the artifact failed to load
    pub predictor: Predictor,
    /// Version string
    pub version: String,
}

impl AppState {
    /// Build state once at startup, loading the model artifact
    pub fn new(config: AppConfig) -> Self {
        let predictor = Predictor::from_path(&config.model_path);
        Self {
            config,
            predictor,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Generic error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_loaded: bool,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/dashboard", get(routes::dashboard::get_dashboard))
        .route("/api/v1/predict", post(routes::predict::post_predict))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        model_loaded: state.predictor.available(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
