//! Treat jar endpoints.

use axum::{extract::State, routing::{get, post}, Json, Router};
use std::sync::Arc;

use super::routes::AppState;
use super::types::{store_error, ApiError, RefillResponse};
use crate::household::{Inventory, InventoryPatch};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_inventory).put(update_inventory))
        .route("/sync", post(sync_inventory))
        .route("/refill", post(refill_inventory))
}

/// GET /api/inventory
async fn get_inventory(State(state): State<Arc<AppState>>) -> Json<Inventory> {
    Json(state.store.view(|data| data.inventory.clone()).await)
}

/// PUT /api/inventory
async fn update_inventory(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<InventoryPatch>,
) -> Result<Json<Inventory>, ApiError> {
    state
        .store
        .mutate(|data| Ok(data.update_inventory(patch)))
        .await
        .map(Json)
        .map_err(store_error)
}

/// POST /api/inventory/sync - Recount treats from recorded heists.
async fn sync_inventory(State(state): State<Arc<AppState>>) -> Result<Json<Inventory>, ApiError> {
    state
        .store
        .mutate(|data| Ok(data.sync_inventory()))
        .await
        .map(Json)
        .map_err(store_error)
}

/// POST /api/inventory/refill
async fn refill_inventory(State(state): State<Arc<AppState>>) -> Result<Json<RefillResponse>, ApiError> {
    let inventory = state
        .store
        .mutate(|data| Ok(data.refill_inventory()))
        .await
        .map_err(store_error)?;
    Ok(Json(RefillResponse {
        message: "Jar refilled!".to_string(),
        inventory,
    }))
}
