//! Team member endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

use super::routes::AppState;
use super::types::{store_error, ApiError};
use crate::household::{Member, MemberPatch, NewMember};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_members).post(create_member))
        .route("/:id", put(update_member).delete(delete_member))
}

/// GET /api/team-members
async fn list_members(State(state): State<Arc<AppState>>) -> Json<Vec<Member>> {
    Json(state.store.view(|data| data.team_members.clone()).await)
}

/// POST /api/team-members
async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewMember>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let member = state
        .store
        .mutate(|data| data.add_member(req))
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/team-members/:id
async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<MemberPatch>,
) -> Result<Json<Member>, ApiError> {
    state
        .store
        .mutate(|data| data.update_member(&id, patch))
        .await
        .map(Json)
        .map_err(store_error)
}

/// DELETE /api/team-members/:id
///
/// Also unassigns the member from every chore.
async fn delete_member(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state
        .store
        .mutate(|data| data.remove_member(&id))
        .await
        .map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}
