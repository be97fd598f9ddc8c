use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;
use serde::Serialize;
use shared::{DayInfo, MonthQuery};

use crate::domain::models::schedule::MONTHS_PER_YEAR;
use crate::AppState;

/// Month metadata for grid rendering: day descriptors plus navigation targets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonthResponse {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub days: Vec<DayInfo>,
    /// `(month, year)` reached by navigating backward
    pub previous: (u32, i32),
    /// `(month, year)` reached by navigating forward
    pub next: (u32, i32),
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/month", get(get_calendar_month))
}

/// Get the day descriptors for one month
async fn get_calendar_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/month - {}/{}", query.year, query.month);

    if query.month >= MONTHS_PER_YEAR {
        return (StatusCode::BAD_REQUEST, "Invalid month index").into_response();
    }

    let calendar = &state.calendar_service;
    let response = CalendarMonthResponse {
        year: query.year,
        month: query.month,
        month_name: calendar.month_name(query.month).to_string(),
        days: calendar.days_in_month(query.year, query.month),
        previous: calendar.previous_month(query.month, query.year),
        next: calendar.next_month(query.month, query.year),
    };

    (StatusCode::OK, Json(response)).into_response()
}
