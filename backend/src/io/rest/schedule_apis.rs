use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use log::info;
use shared::{
    BulkUpdateRequest, BulkUpdateResponse, DayNoteRequest, MonthQuery, MonthScheduleResponse,
    UpdateCellRequest,
};

use crate::domain::commands::schedule::{BulkUpdateCommand, DayNoteCommand, UpdateCellCommand};
use crate::domain::models::schedule::{CellUpdate, MONTHS_PER_YEAR};
use crate::io::rest::error_response;
use crate::AppState;

/// Create a router for schedule related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(get_month_schedule))
        .route("/cell", put(update_cell))
        .route("/bulk", post(bulk_update))
        .route("/day-note", put(update_day_note))
}

/// Full view of one month: days, normalized cells, notes, per-day headcounts
async fn get_month_schedule(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/schedule/month - {}/{}", query.year, query.month);

    if query.month >= MONTHS_PER_YEAR {
        return (StatusCode::BAD_REQUEST, "Invalid month index").into_response();
    }
    let days = state.calendar_service.days_in_month(query.year, query.month);

    let store = state.schedule_service.snapshot();
    let roster = state.roster_service.list();
    let daily_totals = days
        .iter()
        .map(|day| {
            state
                .summary_service
                .staffed_count(&store, query.year, query.month, &roster, day.date)
        })
        .collect();

    let response = MonthScheduleResponse {
        year: query.year,
        month: query.month,
        cells: store.normalized_cells(query.year, query.month),
        day_notes: store.get_month(query.year, query.month).day_notes,
        days,
        daily_totals,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Write a single cell
async fn update_cell(
    State(state): State<AppState>,
    Json(request): Json<UpdateCellRequest>,
) -> impl IntoResponse {
    info!(
        "PUT /api/schedule/cell - {}/{} {} day {}",
        request.year, request.month, request.name, request.day
    );

    let command = UpdateCellCommand {
        year: request.year,
        month: request.month,
        staff: request.name,
        day: request.day,
        status: request.status,
        comment: request.comment,
    };

    match state.schedule_service.update_cell(command) {
        Ok(cell) => (StatusCode::OK, Json(cell)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Apply one status over a confirmed selection
async fn bulk_update(
    State(state): State<AppState>,
    Json(request): Json<BulkUpdateRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/schedule/bulk - {} updates in {}/{}",
        request.updates.len(),
        request.year,
        request.month
    );

    let command = BulkUpdateCommand {
        year: request.year,
        month: request.month,
        updates: request
            .updates
            .into_iter()
            .map(|entry| CellUpdate {
                staff: entry.name,
                day: entry.day,
                status: entry.status,
            })
            .collect(),
    };

    match state.schedule_service.bulk_update(command) {
        Ok(count) => (
            StatusCode::OK,
            Json(BulkUpdateResponse {
                updated_count: count as u32,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Set or clear (empty string) a day-level note
async fn update_day_note(
    State(state): State<AppState>,
    Json(request): Json<DayNoteRequest>,
) -> impl IntoResponse {
    info!(
        "PUT /api/schedule/day-note - {}/{} day {}",
        request.year, request.month, request.day
    );

    let command = DayNoteCommand {
        year: request.year,
        month: request.month,
        day: request.day,
        note: request.note,
    };

    match state.schedule_service.update_day_note(command) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
