//! Review endpoints, including generated weekly reviews and monthly audits.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;

use super::routes::AppState;
use super::types::{
    bad_request, date_or_today, store_error, ApiError, MonthlyAuditRequest, ReviewsClearedResponse,
    WeeklyReviewRequest,
};
use crate::household::{NewReview, Review, ReviewPatch};
use crate::reviews::{parse_month_key, year_month};
use crate::schedule::Period;
use crate::util::today;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route("/all", delete(clear_reviews))
        .route("/monthly-audit", post(monthly_audit))
        .route("/weekly", post(weekly_review))
        .route("/:id", put(update_review).delete(delete_review))
}

/// GET /api/reviews
async fn list_reviews(State(state): State<Arc<AppState>>) -> Json<Vec<Review>> {
    Json(state.store.view(|data| data.reviews.clone()).await)
}

/// POST /api/reviews
async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = state
        .store
        .mutate(|data| data.add_review(req))
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// PUT /api/reviews/:id
async fn update_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<ReviewPatch>,
) -> Result<Json<Review>, ApiError> {
    state
        .store
        .mutate(|data| data.update_review(&id, patch))
        .await
        .map(Json)
        .map_err(store_error)
}

/// DELETE /api/reviews/:id
async fn delete_review(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state
        .store
        .mutate(|data| data.remove_review(&id))
        .await
        .map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/reviews/all
async fn clear_reviews(State(state): State<Arc<AppState>>) -> Result<Json<ReviewsClearedResponse>, ApiError> {
    let deleted_count = state
        .store
        .mutate(|data| Ok(data.clear_reviews()))
        .await
        .map_err(store_error)?;
    Ok(Json(ReviewsClearedResponse {
        message: "All reviews deleted".to_string(),
        deleted_count,
    }))
}

/// POST /api/reviews/monthly-audit - Audit every member not yet audited for the month.
async fn monthly_audit(
    State(state): State<Arc<AppState>>,
    body: Option<Json<MonthlyAuditRequest>>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (year, month) = match req.month.as_deref() {
        Some(key) => parse_month_key(key).ok_or_else(|| bad_request(format!("Invalid month {key:?} (expected YYYY-MM)")))?,
        None => year_month(today()),
    };
    state
        .store
        .mutate(|data| Ok(data.generate_monthly_audits(year, month, &mut rand::thread_rng())))
        .await
        .map(Json)
        .map_err(store_error)
}

/// POST /api/reviews/weekly - Store a generated review of one member's week.
async fn weekly_review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WeeklyReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let week = Period::week_containing(date_or_today(req.date.as_deref())?)
        .map_err(|e| bad_request(e.to_string()))?;
    let review = state
        .store
        .mutate(|data| data.add_weekly_review(&req.member_id, &week, &mut rand::thread_rng()))
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(review)))
}
