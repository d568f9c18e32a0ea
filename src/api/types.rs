//! API request and response types.

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::household::{HouseholdError, Inventory};
use crate::schedule::{parse_calendar_date, Period, PeriodKind};
use crate::stats::{ManagerGrade, PeriodTotals, TopPerformer};
use crate::store::StoreError;
use crate::util::today;

/// Error half of every handler result.
pub type ApiError = (StatusCode, String);

/// Health check response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether writes survive a restart
    pub persistent: bool,
}

/// Body of the complete/uncomplete endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionRequest {
    /// `YYYY-MM-DD`; today when absent
    #[serde(default)]
    pub date: Option<String>,
}

/// Query of the calendar range endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarRangeQuery {
    pub start: String,
    pub end: String,
}

/// Chores occurring on one date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayResponse<T> {
    pub date: String,
    pub chores: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    /// `week` (default) or `month`
    #[serde(default)]
    pub period: Option<String>,
    /// Any date inside the wanted period; today when absent
    #[serde(default)]
    pub date: Option<String>,
}

/// Statistics for one week or month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub period: PeriodKind,
    pub start: String,
    pub end: String,
    /// Leaderboard heading from the settings
    pub title: String,
    #[serde(flatten)]
    pub totals: PeriodTotals,
    pub top_performer: Option<TopPerformer>,
    /// Grade per member id
    pub grades: BTreeMap<String, ManagerGrade>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAuditRequest {
    /// `YYYY-MM`; the current month when absent
    #[serde(default)]
    pub month: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReviewRequest {
    pub member_id: String,
    /// Any date inside the reviewed week; today when absent
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsClearedResponse {
    pub message: String,
    pub deleted_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefillResponse {
    pub message: String,
    pub inventory: Inventory,
}

/// Map a store failure onto an HTTP status.
pub(crate) fn store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::Household(HouseholdError::NotFound { .. }) => (StatusCode::NOT_FOUND, err.to_string()),
        StoreError::Household(HouseholdError::Invalid(_)) => (StatusCode::BAD_REQUEST, err.to_string()),
        StoreError::Io(_) | StoreError::Serialize(_) => {
            tracing::error!("Failed to persist household data: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, message.into())
}

/// Parse an optional `YYYY-MM-DD` parameter, defaulting to today.
pub(crate) fn date_or_today(raw: Option<&str>) -> Result<NaiveDate, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => parse_calendar_date(raw).map_err(|e| bad_request(e.to_string())),
        None => Ok(today()),
    }
}

/// Resolve the `period`/`date` query pair into a concrete span.
pub(crate) fn stats_period(query: &StatsQuery) -> Result<(PeriodKind, Period), ApiError> {
    let kind = match query.period.as_deref() {
        Some(raw) => raw.parse::<PeriodKind>().map_err(bad_request)?,
        None => PeriodKind::Week,
    };
    let date = date_or_today(query.date.as_deref())?;
    let period = Period::containing(kind, date).map_err(|e| bad_request(e.to_string()))?;
    Ok((kind, period))
}
