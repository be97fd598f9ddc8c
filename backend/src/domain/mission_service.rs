//! Mission type registry service.
//!
//! Mission types are the valid status codes a cell can hold, each with a
//! display label and color tokens. Codes are unique within the registry and
//! the seeded system entries can never be deleted. Persisted as a JSON array
//! under the `mission_types` key after every change.

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use shared::MissionType;
use std::sync::{Arc, Mutex};

use crate::domain::commands::missions::{AddMissionCommand, RemoveMissionCommand};
use crate::storage::{keys, SettingsStorage};

/// Errors raised by registry edits. The registry is unchanged on every error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Mission code '{0}' already exists")]
    DuplicateMissionCode(String),
    #[error("Mission '{0}' is a system entry and cannot be deleted")]
    SystemMissionProtected(String),
    #[error("Mission code '{0}' not found")]
    UnknownMissionCode(String),
}

fn system(code: &str, label: &str, bg: &str, text: &str) -> MissionType {
    MissionType {
        code: code.to_string(),
        label: label.to_string(),
        bg: bg.to_string(),
        text: text.to_string(),
        is_system: true,
    }
}

/// Seed registry used when no registry has been persisted yet.
static DEFAULT_MISSION_TYPES: Lazy<Vec<MissionType>> = Lazy::new(|| {
    vec![
        system("P", "Présent", "bg-white", "text-gray-800"),
        system("ABS", "Absent", "bg-red-500", "text-white"),
        system("AST", "Astreinte", "bg-yellow-300", "text-black"),
        system("NN", "Navette Nord", "bg-green-300", "text-black"),
        system("NS", "Navette Sud", "bg-blue-300", "text-black"),
        system("NM", "Navette montagne", "bg-stone-400", "text-white"),
        system("EPI", "EPI", "bg-orange-400", "text-white"),
        system("", "Vide", "bg-slate-50", "text-transparent"),
    ]
});

/// Service for managing the mission type registry.
#[derive(Clone)]
pub struct MissionService {
    missions: Arc<Mutex<Vec<MissionType>>>,
    settings: Arc<dyn SettingsStorage>,
}

impl MissionService {
    /// Create the service, loading the persisted registry or seeding the
    /// default one.
    pub fn new(settings: Arc<dyn SettingsStorage>) -> Result<Self> {
        let missions = match settings.load(keys::MISSION_TYPES)? {
            Some(json) => match serde_json::from_str::<Vec<MissionType>>(&json) {
                Ok(missions) => {
                    info!("Loaded mission registry with {} entries", missions.len());
                    missions
                }
                Err(e) => {
                    warn!("Stored mission registry is unreadable, seeding defaults: {}", e);
                    DEFAULT_MISSION_TYPES.clone()
                }
            },
            None => {
                info!("No mission registry stored yet, seeding defaults");
                DEFAULT_MISSION_TYPES.clone()
            }
        };

        Ok(Self {
            missions: Arc::new(Mutex::new(missions)),
            settings,
        })
    }

    /// The registry in display order.
    pub fn list(&self) -> Vec<MissionType> {
        self.missions.lock().unwrap().clone()
    }

    /// Register a new mission type. Codes are unique: an existing code is
    /// rejected with [`RegistryError::DuplicateMissionCode`].
    pub fn add_mission(&self, command: AddMissionCommand) -> Result<Vec<MissionType>> {
        let mission = command.mission;

        let snapshot = {
            let mut missions = self.missions.lock().unwrap();
            if missions.iter().any(|m| m.code == mission.code) {
                return Err(RegistryError::DuplicateMissionCode(mission.code).into());
            }
            missions.push(mission.clone());
            missions.clone()
        };
        self.persist(&snapshot)?;

        info!("Added mission type '{}' ({})", mission.code, mission.label);
        Ok(snapshot)
    }

    /// Delete a mission type by code. System entries are protected; the
    /// registry keeps the same codes in the same order on rejection.
    pub fn remove_mission(&self, command: RemoveMissionCommand) -> Result<Vec<MissionType>> {
        let snapshot = {
            let mut missions = self.missions.lock().unwrap();
            let entry = missions
                .iter()
                .find(|m| m.code == command.code)
                .ok_or_else(|| RegistryError::UnknownMissionCode(command.code.clone()))?;
            if entry.is_system {
                return Err(RegistryError::SystemMissionProtected(command.code).into());
            }
            missions.retain(|m| m.code != command.code);
            missions.clone()
        };
        self.persist(&snapshot)?;

        info!("Removed mission type '{}'", command.code);
        Ok(snapshot)
    }

    /// Replace the whole registry (sync pull).
    pub fn replace(&self, new_missions: Vec<MissionType>) -> Result<()> {
        info!(
            "Replacing mission registry from sync payload ({} entries)",
            new_missions.len()
        );
        {
            let mut missions = self.missions.lock().unwrap();
            *missions = new_missions.clone();
        }
        self.persist(&new_missions)
    }

    fn persist(&self, missions: &[MissionType]) -> Result<()> {
        let json = serde_json::to_string(missions).context("Failed to serialize mission registry")?;
        self.settings
            .save(keys::MISSION_TYPES, &json)
            .context("Failed to persist mission registry")
    }
}
