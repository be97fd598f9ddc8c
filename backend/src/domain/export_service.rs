//! Export service domain logic for the shift planner.
//!
//! Builds the downloadable backup document (the three top-level state
//! containers as pretty-printed JSON) and optionally writes it to a path.
//! The UI only handles the actual download/save dialog.

use anyhow::{Context, Result};
use log::info;
use shared::{BackupDocument, ExportResponse};
use std::fs;
use std::path::Path;

use crate::domain::mission_service::MissionService;
use crate::domain::roster_service::RosterService;
use crate::domain::schedule_service::ScheduleService;

/// Export service that assembles backup documents from current state.
#[derive(Clone)]
pub struct ExportService {
    schedule: ScheduleService,
    roster: RosterService,
    missions: MissionService,
}

impl ExportService {
    pub fn new(schedule: ScheduleService, roster: RosterService, missions: MissionService) -> Self {
        Self {
            schedule,
            roster,
            missions,
        }
    }

    /// Build the backup document for download. The filename carries the year
    /// the user was looking at.
    pub fn build_backup(&self, year: i32) -> Result<ExportResponse> {
        info!("Building backup document for {}", year);

        let document = BackupDocument {
            staff_names: self.roster.list(),
            mission_types: self.missions.list(),
            schedule_data: self.schedule.snapshot().years().clone(),
        };
        let content = serde_json::to_string_pretty(&document)
            .context("Failed to serialize backup document")?;

        Ok(ExportResponse {
            filename: format!("backup_{}.json", year),
            content,
        })
    }

    /// Write the backup document to a file on disk.
    pub fn export_to_path<P: AsRef<Path>>(&self, year: i32, path: P) -> Result<ExportResponse> {
        let backup = self.build_backup(year)?;
        fs::write(path.as_ref(), &backup.content)
            .with_context(|| format!("Failed to write backup to {:?}", path.as_ref()))?;

        info!("Wrote backup document to {:?}", path.as_ref());
        Ok(backup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::schedule::UpdateCellCommand;
    use crate::storage::{JsonConnection, SettingsRepository, SettingsStorage};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn setup_service() -> (ExportService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        let settings: Arc<dyn SettingsStorage> = Arc::new(SettingsRepository::new(connection));

        let schedule = ScheduleService::new(settings.clone()).unwrap();
        schedule
            .update_cell(UpdateCellCommand {
                year: 2024,
                month: 3,
                staff: "NEUVILLE".to_string(),
                day: 15,
                status: "P".to_string(),
                comment: None,
            })
            .unwrap();

        let roster = RosterService::new(settings.clone()).unwrap();
        let missions = MissionService::new(settings).unwrap();
        (ExportService::new(schedule, roster, missions), temp_dir)
    }

    #[test]
    fn test_backup_contains_three_containers() {
        let (service, _temp_dir) = setup_service();
        let backup = service.build_backup(2024).unwrap();

        assert_eq!(backup.filename, "backup_2024.json");

        let document: BackupDocument = serde_json::from_str(&backup.content).unwrap();
        assert_eq!(document.staff_names.len(), shared::DEFAULT_STAFF_NAMES.len());
        assert_eq!(document.mission_types.len(), 8);
        assert!(document.schedule_data.contains_key(&2024));
    }

    #[test]
    fn test_export_to_path_writes_file() {
        let (service, temp_dir) = setup_service();
        let path = temp_dir.path().join("backup.json");

        service.export_to_path(2024, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"staffNames\""));
        assert!(written.contains("\"scheduleData\""));
        assert!(written.contains("\"missionTypes\""));
    }
}
