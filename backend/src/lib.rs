//! # Backend Crate
//!
//! Contains all non-UI logic for the shift planner application.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: Business logic for schedule editing, aggregation and sync
//! - **Storage**: JSON file persistence keyed by logical setting names
//! - **IO**: REST interface layer that exposes functionality to the UI
//!
//! The backend is UI-agnostic: it could serve a different frontend or even a
//! CLI without modification.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (grid frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (services, schedule store)
//!     ↓
//! Storage Layer (JSON files)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use axum::Router;
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::domain::calendar::CalendarService;
use crate::domain::export_service::ExportService;
use crate::domain::mission_service::MissionService;
use crate::domain::roster_service::RosterService;
use crate::domain::schedule_service::ScheduleService;
use crate::domain::summary::SummaryService;
use crate::domain::sync_service::{HttpSyncTransport, SyncService};
use crate::storage::{JsonConnection, SettingsRepository, SettingsStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub schedule_service: ScheduleService,
    pub calendar_service: CalendarService,
    pub roster_service: RosterService,
    pub mission_service: MissionService,
    pub summary_service: SummaryService,
    pub sync_service: SyncService,
    pub export_service: ExportService,
    pub settings: Arc<dyn SettingsStorage>,
}

/// Initialize the backend with all required services
pub fn initialize_backend<P: AsRef<Path>>(base_directory: P) -> Result<AppState> {
    info!("Setting up storage");
    let connection = JsonConnection::new(base_directory)?;
    let settings: Arc<dyn SettingsStorage> = Arc::new(SettingsRepository::new(connection));

    info!("Setting up domain model");
    let schedule_service = ScheduleService::new(settings.clone())?;
    let calendar_service = CalendarService::new();
    let roster_service = RosterService::new(settings.clone())?;
    let mission_service = MissionService::new(settings.clone())?;
    let summary_service = SummaryService::new();
    let sync_service = SyncService::new(
        schedule_service.clone(),
        roster_service.clone(),
        mission_service.clone(),
        Arc::new(HttpSyncTransport::new()?),
        settings.clone(),
    );
    let export_service = ExportService::new(
        schedule_service.clone(),
        roster_service.clone(),
        mission_service.clone(),
    );

    info!("Setting up application state");
    Ok(AppState {
        schedule_service,
        calendar_service,
        roster_service,
        mission_service,
        summary_service,
        sync_service,
        export_service,
        settings,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .nest("/calendar", io::rest::calendar_apis::router())
        .nest("/schedule", io::rest::schedule_apis::router())
        .nest("/staff", io::rest::staff_apis::router())
        .nest("/missions", io::rest::mission_apis::router())
        .nest("/role", io::rest::role_apis::router())
        .nest("/summary", io::rest::summary_apis::router())
        .nest("/sync", io::rest::sync_apis::router())
        .nest("/export", io::rest::export_apis::router());

    // Define our main application router
    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
