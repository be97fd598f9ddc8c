//! # REST API Interface Layer
//!
//! HTTP REST endpoints for the shift planner application. This layer handles:
//! - Request/response serialization and deserialization
//! - Error translation from domain to HTTP status codes
//! - Request logging
//!
//! Pure translation layer: no business logic, every handler delegates to a
//! service held in the application state.

pub mod calendar_apis;
pub mod export_apis;
pub mod mission_apis;
pub mod role_apis;
pub mod schedule_apis;
pub mod staff_apis;
pub mod summary_apis;
pub mod sync_apis;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::domain::mission_service::RegistryError;
use crate::domain::models::schedule::ScheduleError;
use crate::domain::sync_service::SyncError;

/// Map a domain error to an HTTP response.
///
/// Rejected coordinates are the caller's fault (400), registry conflicts map
/// to 409/403/404, and sync trouble with the remote endpoint is a bad
/// gateway. Anything unrecognized is a 500 and gets logged in full.
pub(crate) fn error_response(err: anyhow::Error) -> Response {
    if let Some(e) = err.downcast_ref::<ScheduleError>() {
        return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
    }
    if let Some(e) = err.downcast_ref::<RegistryError>() {
        let status = match e {
            RegistryError::DuplicateMissionCode(_) => StatusCode::CONFLICT,
            RegistryError::SystemMissionProtected(_) => StatusCode::FORBIDDEN,
            RegistryError::UnknownMissionCode(_) => StatusCode::NOT_FOUND,
        };
        return (status, e.to_string()).into_response();
    }
    if let Some(e) = err.downcast_ref::<SyncError>() {
        let status = match e {
            SyncError::EndpointNotConfigured => StatusCode::BAD_REQUEST,
            SyncError::Unavailable(_) | SyncError::MalformedPayload(_) => StatusCode::BAD_GATEWAY,
        };
        return (status, e.to_string()).into_response();
    }

    error!("Unhandled error: {:?}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()).into_response()
}
