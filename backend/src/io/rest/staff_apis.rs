use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use log::info;
use shared::AddStaffRequest;

use crate::domain::commands::roster::{AddStaffCommand, RemoveStaffCommand};
use crate::io::rest::error_response;
use crate::AppState;

/// Create a router for staff roster APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_staff).post(add_staff))
        .route("/:name", delete(remove_staff))
}

/// The roster in display order
async fn list_staff(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/staff");
    (StatusCode::OK, Json(state.roster_service.list())).into_response()
}

/// Append a name to the roster
async fn add_staff(
    State(state): State<AppState>,
    Json(request): Json<AddStaffRequest>,
) -> impl IntoResponse {
    info!("POST /api/staff - '{}'", request.name);

    if request.name.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Staff name cannot be empty").into_response();
    }

    match state.roster_service.add_staff(AddStaffCommand {
        name: request.name,
    }) {
        Ok(names) => (StatusCode::CREATED, Json(names)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Remove a name from the roster
async fn remove_staff(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/staff/{}", name);

    match state.roster_service.remove_staff(RemoveStaffCommand { name }) {
        Ok(names) => (StatusCode::OK, Json(names)).into_response(),
        Err(e) => error_response(e),
    }
}
