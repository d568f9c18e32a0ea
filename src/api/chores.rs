//! Chore endpoints, including completion marks.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

use super::routes::AppState;
use super::types::{date_or_today, store_error, ApiError, CompletionRequest};
use crate::household::{Chore, ChorePatch, CompletionOutcome, NewChore};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_chores).post(create_chore))
        .route("/:id", put(update_chore).delete(delete_chore))
        .route("/:id/complete", post(complete_chore))
        .route("/:id/uncomplete", post(uncomplete_chore))
}

/// GET /api/chores
async fn list_chores(State(state): State<Arc<AppState>>) -> Json<Vec<Chore>> {
    Json(state.store.view(|data| data.chores.clone()).await)
}

/// POST /api/chores
async fn create_chore(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewChore>,
) -> Result<(StatusCode, Json<Chore>), ApiError> {
    let chore = state
        .store
        .mutate(|data| data.add_chore(req))
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(chore)))
}

/// PUT /api/chores/:id
async fn update_chore(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<ChorePatch>,
) -> Result<Json<Chore>, ApiError> {
    state
        .store
        .mutate(|data| data.update_chore(&id, patch))
        .await
        .map(Json)
        .map_err(store_error)
}

/// DELETE /api/chores/:id
async fn delete_chore(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state
        .store
        .mutate(|data| data.remove_chore(&id))
        .await
        .map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/chores/:id/complete
async fn complete_chore(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<CompletionRequest>>,
) -> Result<Json<CompletionOutcome>, ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let date = date_or_today(req.date.as_deref())?;
    state
        .store
        .mutate(|data| data.complete_chore(&id, date))
        .await
        .map(Json)
        .map_err(store_error)
}

/// POST /api/chores/:id/uncomplete
async fn uncomplete_chore(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<CompletionRequest>>,
) -> Result<Json<CompletionOutcome>, ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let date = date_or_today(req.date.as_deref())?;
    state
        .store
        .mutate(|data| data.uncomplete_chore(&id, date))
        .await
        .map(Json)
        .map_err(store_error)
}
