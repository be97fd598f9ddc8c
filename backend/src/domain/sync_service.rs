//! Cloud sync service.
//!
//! Exchanges the full-state JSON document with a remote endpoint. The
//! in-memory state is the source of truth: a pull replaces store, roster and
//! mission registry wholesale (last call wins, no merge) and only after the
//! transport returned a structurally valid payload. A push serializes the
//! current state with a timestamp and sends it as-is.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use log::{error, info};
use shared::SyncPayload;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::mission_service::MissionService;
use crate::domain::roster_service::RosterService;
use crate::domain::schedule_service::ScheduleService;
use crate::storage::{keys, SettingsStorage};

/// Errors surfaced by sync operations. Local state is unchanged on every error.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Transport failure talking to the endpoint
    #[error("Sync endpoint unavailable: {0}")]
    Unavailable(String),
    /// The endpoint answered but the document is missing required fields
    #[error("Malformed sync payload: {0}")]
    MalformedPayload(String),
    /// No endpoint URL has been configured yet
    #[error("No sync endpoint configured")]
    EndpointNotConfigured,
}

/// Transport abstraction for the sync endpoint.
///
/// `pull` returns the raw JSON document; payload validation happens in the
/// service so a stub transport in tests exercises the same path.
#[async_trait]
pub trait SyncTransport: Send + Sync {
    async fn pull(&self, endpoint: &str) -> Result<serde_json::Value, SyncError>;
    async fn push(&self, endpoint: &str, payload: &SyncPayload) -> Result<(), SyncError>;
}

/// HTTP transport: GET for pull, POST of the JSON document for push.
#[derive(Clone)]
pub struct HttpSyncTransport {
    http: reqwest::Client,
}

impl HttpSyncTransport {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("shift-planner/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http })
    }
}

#[async_trait]
impl SyncTransport for HttpSyncTransport {
    async fn pull(&self, endpoint: &str) -> Result<serde_json::Value, SyncError> {
        let response = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(|e| SyncError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| SyncError::Unavailable(e.to_string()))?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SyncError::MalformedPayload(e.to_string()))
    }

    async fn push(&self, endpoint: &str, payload: &SyncPayload) -> Result<(), SyncError> {
        self.http
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SyncError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| SyncError::Unavailable(e.to_string()))?;
        Ok(())
    }
}

/// Outcome of a completed pull.
#[derive(Debug, Clone, PartialEq)]
pub struct PullOutcome {
    pub roster_replaced: bool,
    pub missions_replaced: bool,
}

/// Service orchestrating pull/push against the configured endpoint.
#[derive(Clone)]
pub struct SyncService {
    schedule: ScheduleService,
    roster: RosterService,
    missions: MissionService,
    transport: Arc<dyn SyncTransport>,
    settings: Arc<dyn SettingsStorage>,
}

impl SyncService {
    pub fn new(
        schedule: ScheduleService,
        roster: RosterService,
        missions: MissionService,
        transport: Arc<dyn SyncTransport>,
        settings: Arc<dyn SettingsStorage>,
    ) -> Self {
        Self {
            schedule,
            roster,
            missions,
            transport,
            settings,
        }
    }

    /// The configured endpoint URL, if any.
    pub fn endpoint(&self) -> Result<Option<String>> {
        self.settings.load(keys::SYNC_ENDPOINT)
    }

    /// Persist the endpoint URL.
    pub fn set_endpoint(&self, url: &str) -> Result<()> {
        info!("Configuring sync endpoint");
        self.settings.save(keys::SYNC_ENDPOINT, url)
    }

    /// Pull the remote document and replace local state with it.
    ///
    /// The payload is validated in full before anything is touched; a
    /// malformed document leaves store, roster and registry exactly as they
    /// were. Roster and registry are only replaced when present.
    pub async fn pull(&self) -> Result<PullOutcome> {
        let endpoint = self.require_endpoint()?;
        info!("Pulling schedule data from sync endpoint");

        let raw = self.transport.pull(&endpoint).await?;
        let payload: SyncPayload = serde_json::from_value(raw)
            .map_err(|e| SyncError::MalformedPayload(e.to_string()))?;

        self.schedule.replace_store(payload.schedule_data.into())?;

        let roster_replaced = match payload.staff_names {
            Some(names) => {
                self.roster.replace(names)?;
                true
            }
            None => false,
        };
        let missions_replaced = match payload.mission_types {
            Some(missions) => {
                self.missions.replace(missions)?;
                true
            }
            None => false,
        };

        info!(
            "Pull complete (roster replaced: {}, missions replaced: {})",
            roster_replaced, missions_replaced
        );
        Ok(PullOutcome {
            roster_replaced,
            missions_replaced,
        })
    }

    /// Push the current full state to the endpoint. Returns the `lastSync`
    /// timestamp stamped into the document.
    pub async fn push(&self) -> Result<String> {
        let endpoint = self.require_endpoint()?;
        let last_sync = Utc::now().to_rfc3339();
        info!("Pushing schedule data to sync endpoint at {}", last_sync);

        let payload = self.build_payload(Some(last_sync.clone()));
        if let Err(e) = self.transport.push(&endpoint, &payload).await {
            error!("Push failed: {}", e);
            return Err(e.into());
        }

        Ok(last_sync)
    }

    /// The full-state document as it would be pushed.
    pub fn build_payload(&self, last_sync: Option<String>) -> SyncPayload {
        SyncPayload {
            staff_names: Some(self.roster.list()),
            mission_types: Some(self.missions.list()),
            schedule_data: self.schedule.snapshot().years().clone(),
            last_sync,
        }
    }

    fn require_endpoint(&self) -> Result<String> {
        match self.endpoint()? {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(SyncError::EndpointNotConfigured.into()),
        }
    }
}
