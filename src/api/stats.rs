//! Period statistics endpoint.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::routes::AppState;
use super::types::{stats_period, ApiError, StatsQuery, StatsResponse};
use crate::household::HouseholdData;
use crate::schedule::{format_calendar_date, Period, PeriodKind};
use crate::stats::{aggregate_for_period, select_top_performer, ManagerGrade};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_stats))
}

/// GET /api/stats?period=week|month&date=YYYY-MM-DD
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, ApiError> {
    let (kind, period) = stats_period(&query)?;
    let response = state.store.view(|data| build_stats(data, kind, &period)).await;
    Ok(Json(response))
}

fn build_stats(data: &HouseholdData, kind: PeriodKind, period: &Period) -> StatsResponse {
    let totals = aggregate_for_period(&data.chores, &data.team_members, period);
    let top_performer = select_top_performer(&totals.completed_counts, &data.team_members);
    let grades: BTreeMap<String, ManagerGrade> = data
        .team_members
        .iter()
        .map(|m| {
            let grade = ManagerGrade::from_counts(totals.completed(&m.id), totals.scheduled(&m.id));
            (m.id.clone(), grade)
        })
        .collect();

    StatsResponse {
        period: kind,
        start: format_calendar_date(period.start()),
        end: format_calendar_date(period.end()),
        title: data.settings.leaderboard_title(kind).to_string(),
        totals,
        top_performer,
        grades,
    }
}

#[cfg(test)]
mod tests {
    use crate::api::routes::tests::{send, test_app};
    use crate::household::{Chore, HouseholdData, Member};
    use axum::http::StatusCode;
    use serde_json::json;

    fn household() -> HouseholdData {
        let mut data = HouseholdData::default();
        data.team_members.push(Member::new("m1", "Rex", "dog"));
        data.team_members.push(Member::new("m2", "Tom", "cat"));
        data.chores.push(Chore {
            recurrence: "daily".into(),
            start_date: "2024-06-01".into(),
            assigned_to_id: Some("m1".into()),
            completed_dates: vec!["2024-06-01".into(), "2024-06-02".into()],
            ..Chore::fixture("feed", "Feed")
        });
        data.chores.push(Chore {
            recurrence: "weekly".into(),
            start_date: "2024-06-03".into(),
            assigned_to_id: Some("m1".into()),
            co_assignee_id: Some("m2".into()),
            is_team_task: true,
            completed_dates: vec!["2024-06-03".into()],
            ..Chore::fixture("guard", "Guard the sofa")
        });
        data
    }

    #[tokio::test]
    async fn weekly_stats() {
        let app = test_app(household());
        let (status, body) = send(&app, "GET", "/api/stats?period=week&date=2024-06-04", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "week");
        assert_eq!(body["start"], "2024-06-02");
        assert_eq!(body["end"], "2024-06-08");
        assert_eq!(body["title"], "Employee of the Week");
        assert_eq!(body["completedCounts"], json!({ "m1": 1.5, "m2": 0.5 }));
        assert_eq!(body["scheduledCounts"], json!({ "m1": 8, "m2": 1 }));
        assert_eq!(body["topPerformer"], json!({ "memberId": "m1", "count": 1.5 }));
        assert_eq!(body["grades"]["m2"]["grade"], "F");
        assert_eq!(body["grades"]["m1"]["percentage"], 19);
    }

    #[tokio::test]
    async fn monthly_stats_use_month_title() {
        let app = test_app(household());
        let (status, body) = send(&app, "GET", "/api/stats?period=month&date=2024-06-20", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["start"], "2024-06-01");
        assert_eq!(body["end"], "2024-06-30");
        assert_eq!(body["title"], "Employee of the Month");
        assert_eq!(body["completedCounts"]["m1"], 2.5);
        assert_eq!(body["scheduledCounts"]["m1"], 34);
    }

    #[tokio::test]
    async fn empty_period_has_no_top_performer() {
        let app = test_app(household());
        let (_, body) = send(&app, "GET", "/api/stats?period=week&date=2023-01-04", None).await;
        assert_eq!(body["topPerformer"], serde_json::Value::Null);
        assert_eq!(body["grades"]["m1"]["grade"], "N/A");
    }

    #[tokio::test]
    async fn bad_query_is_rejected() {
        let app = test_app(household());
        let (status, _) = send(&app, "GET", "/api/stats?period=year", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, "GET", "/api/stats?date=soon", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, "GET", "/api/stats?period=week&date=%2B262142-12-31", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
