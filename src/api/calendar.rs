//! Calendar endpoints: which chores occur on which dates.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::routes::AppState;
use super::types::{bad_request, ApiError, CalendarDayResponse, CalendarRangeQuery};
use crate::household::Chore;
use crate::schedule::{format_calendar_date, parse_calendar_date, Period};
use crate::stats::{occurrences_between, occurrences_on, DayOccurrences};

/// Longest span the range endpoint will expand.
const MAX_RANGE_DAYS: i64 = 366;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(calendar_range))
        .route("/:date", get(calendar_day))
}

/// GET /api/calendar/:date - Chores occurring on one date.
async fn calendar_day(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<CalendarDayResponse<Chore>>, ApiError> {
    let date = parse_calendar_date(&date).map_err(|e| bad_request(e.to_string()))?;
    let chores: Vec<Chore> = state
        .store
        .view(|data| occurrences_on(&data.chores, date).into_iter().cloned().collect())
        .await;
    Ok(Json(CalendarDayResponse {
        date: format_calendar_date(date),
        chores,
    }))
}

/// GET /api/calendar?start=&end= - Chore ids per date of an inclusive range.
async fn calendar_range(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CalendarRangeQuery>,
) -> Result<Json<Vec<DayOccurrences>>, ApiError> {
    let start = parse_calendar_date(&query.start).map_err(|e| bad_request(e.to_string()))?;
    let end = parse_calendar_date(&query.end).map_err(|e| bad_request(e.to_string()))?;
    let period = Period::new(start, end).map_err(|e| bad_request(e.to_string()))?;
    if period.len_days() > MAX_RANGE_DAYS {
        return Err(bad_request(format!(
            "Calendar range is limited to {} days, got {}",
            MAX_RANGE_DAYS,
            period.len_days()
        )));
    }
    let days = state
        .store
        .view(|data| occurrences_between(&data.chores, &period))
        .await;
    Ok(Json(days))
}
