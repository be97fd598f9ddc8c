use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;
use serde::Deserialize;
use shared::SummaryResponse;

use crate::AppState;

// Query parameters for the annual summary API
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub year: i32,
}

/// Create a router for summary APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_summary))
}

/// Annual per-staff tallies for the requested year
async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> impl IntoResponse {
    info!("GET /api/summary - year {}", query.year);

    let store = state.schedule_service.snapshot();
    let roster = state.roster_service.list();
    let missions = state.mission_service.list();
    let summaries = state
        .summary_service
        .summarize(&store, query.year, &roster, &missions);

    (
        StatusCode::OK,
        Json(SummaryResponse {
            year: query.year,
            summaries,
        }),
    )
        .into_response()
}
