use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;
use serde::Deserialize;

use crate::io::rest::error_response;
use crate::storage::keys;
use crate::AppState;

// Request body for selecting the UI role
#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub role: String,
}

/// Create a router for the saved UI role
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_role).put(set_role))
}

/// The saved UI role, if one has been selected yet
async fn get_role(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/role");

    match state.settings.load(keys::ROLE) {
        Ok(role) => (StatusCode::OK, Json(role)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Persist the selected UI role
async fn set_role(
    State(state): State<AppState>,
    Json(request): Json<RoleRequest>,
) -> impl IntoResponse {
    info!("PUT /api/role - '{}'", request.role);

    if request.role != "admin" && request.role != "user" {
        return (StatusCode::BAD_REQUEST, "Unknown role").into_response();
    }

    match state.settings.save(keys::ROLE, &request.role) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
