use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::{error, info};
use shared::{SyncEndpointRequest, SyncPullResponse, SyncPushResponse};

use crate::io::rest::error_response;
use crate::AppState;

/// Create a router for cloud sync APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/endpoint", get(get_endpoint).put(set_endpoint))
        .route("/pull", post(pull))
        .route("/push", post(push))
}

/// The configured sync endpoint URL, if any
async fn get_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/sync/endpoint");

    match state.sync_service.endpoint() {
        Ok(url) => (StatusCode::OK, Json(url)).into_response(),
        Err(e) => {
            error!("Failed to read sync endpoint: {}", e);
            error_response(e)
        }
    }
}

/// Configure the sync endpoint URL
async fn set_endpoint(
    State(state): State<AppState>,
    Json(request): Json<SyncEndpointRequest>,
) -> impl IntoResponse {
    info!("PUT /api/sync/endpoint");

    match state.sync_service.set_endpoint(&request.url) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// Pull the remote document and replace local state with it
async fn pull(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/sync/pull");

    match state.sync_service.pull().await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SyncPullResponse {
                roster_replaced: outcome.roster_replaced,
                missions_replaced: outcome.missions_replaced,
                success_message: "Données récupérées avec succès".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Push the current full state to the remote endpoint
async fn push(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/sync/push");

    match state.sync_service.push().await {
        Ok(last_sync) => (
            StatusCode::OK,
            Json(SyncPushResponse {
                last_sync,
                success_message: "Données synchronisées avec succès".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
