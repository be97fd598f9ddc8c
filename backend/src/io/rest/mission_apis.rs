use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use log::info;
use shared::MissionType;

use crate::domain::commands::missions::{AddMissionCommand, RemoveMissionCommand};
use crate::io::rest::error_response;
use crate::AppState;

/// Create a router for mission type registry APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_missions).post(add_mission))
        .route("/:code", delete(remove_mission))
}

/// The registry in display order
async fn list_missions(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/missions");
    (StatusCode::OK, Json(state.mission_service.list())).into_response()
}

/// Register a new mission type
async fn add_mission(
    State(state): State<AppState>,
    Json(mission): Json<MissionType>,
) -> impl IntoResponse {
    info!("POST /api/missions - '{}'", mission.code);

    // user-created entries are never system entries
    let mission = MissionType {
        is_system: false,
        ..mission
    };
    match state.mission_service.add_mission(AddMissionCommand { mission }) {
        Ok(missions) => (StatusCode::CREATED, Json(missions)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Delete a mission type by code
async fn remove_mission(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/missions/{}", code);

    match state.mission_service.remove_mission(RemoveMissionCommand { code }) {
        Ok(missions) => (StatusCode::OK, Json(missions)).into_response(),
        Err(e) => error_response(e),
    }
}
