use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;
use serde::Deserialize;

use crate::io::rest::error_response;
use crate::AppState;

// Query parameters for the export API
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub year: i32,
}

/// Create a router for export APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(export_backup))
}

/// Build the downloadable backup document
async fn export_backup(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> impl IntoResponse {
    info!("GET /api/export - year {}", query.year);

    match state.export_service.build_backup(query.year) {
        Ok(backup) => (StatusCode::OK, Json(backup)).into_response(),
        Err(e) => error_response(e),
    }
}
