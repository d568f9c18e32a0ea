//! Router assembly and server lifecycle.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::HouseholdStore;

use super::calendar as calendar_api;
use super::chores as chores_api;
use super::inventory as inventory_api;
use super::members as members_api;
use super::reviews as reviews_api;
use super::settings as settings_api;
use super::stats as stats_api;
use super::types::*;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<HouseholdStore>,
}

/// Build the application router around `state`.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/health", get(health))
        .nest("/api/team-members", members_api::routes())
        .nest("/api/settings", settings_api::routes())
        .nest("/api/chores", chores_api::routes())
        .nest("/api/calendar", calendar_api::routes())
        .nest("/api/stats", stats_api::routes())
        .nest("/api/reviews", reviews_api::routes())
        .nest("/api/inventory", inventory_api::routes())
        .layer(DefaultBodyLimit::max(state.config.body_limit));

    let app = match &state.config.static_dir {
        Some(dir) => {
            tracing::info!("Serving dashboard from {}", dir.display());
            let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            api.fallback_service(spa)
        }
        None => api,
    };

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = Arc::new(HouseholdStore::from_config(&config).await?);
    let addr = config.bind_addr();
    let state = Arc::new(AppState { config, store });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for SIGINT/SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        persistent: state.store.is_persistent(),
    })
}
