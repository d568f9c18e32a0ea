//! Settings endpoints.

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::routes::AppState;
use super::types::{store_error, ApiError};
use crate::household::Settings;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

/// GET /api/settings
async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.store.view(|data| data.settings.clone()).await)
}

/// PUT /api/settings - Shallow-merge the body into the stored settings.
async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Settings>, ApiError> {
    state
        .store
        .mutate(|data| data.merge_settings(patch))
        .await
        .map(Json)
        .map_err(store_error)
}
