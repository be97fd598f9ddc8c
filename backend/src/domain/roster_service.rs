//! Staff roster service.
//!
//! The roster is an ordered set of unique uppercase names. Order is display
//! order and stays stable across edits: inserts append, deletes remove in
//! place. Persisted as a JSON array under the `staff_names` key after every
//! change.

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::{Arc, Mutex};

use crate::domain::commands::roster::{AddStaffCommand, RemoveStaffCommand};
use crate::storage::{keys, SettingsStorage};

/// Service for managing the ordered staff roster.
#[derive(Clone)]
pub struct RosterService {
    names: Arc<Mutex<Vec<String>>>,
    settings: Arc<dyn SettingsStorage>,
}

impl RosterService {
    /// Create the service, loading the persisted roster or seeding the
    /// default one.
    pub fn new(settings: Arc<dyn SettingsStorage>) -> Result<Self> {
        let names = match settings.load(keys::STAFF_NAMES)? {
            Some(json) => match serde_json::from_str::<Vec<String>>(&json) {
                Ok(names) => {
                    info!("Loaded roster with {} names", names.len());
                    names
                }
                Err(e) => {
                    warn!("Stored roster is unreadable, seeding defaults: {}", e);
                    Self::default_names()
                }
            },
            None => {
                info!("No roster stored yet, seeding defaults");
                Self::default_names()
            }
        };

        Ok(Self {
            names: Arc::new(Mutex::new(names)),
            settings,
        })
    }

    /// The roster in display order.
    pub fn list(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }

    /// Append a name to the roster. Names are trimmed and uppercased; an
    /// already-present name is a no-op. Returns the resulting roster.
    pub fn add_staff(&self, command: AddStaffCommand) -> Result<Vec<String>> {
        let name = command.name.trim().to_uppercase();
        if name.is_empty() {
            return Err(anyhow::anyhow!("Staff name cannot be empty"));
        }

        let snapshot = {
            let mut names = self.names.lock().unwrap();
            if names.contains(&name) {
                warn!("Staff name '{}' already on the roster", name);
                return Ok(names.clone());
            }
            names.push(name.clone());
            names.clone()
        };
        self.persist(&snapshot)?;

        info!("Added staff '{}' ({} on roster)", name, snapshot.len());
        Ok(snapshot)
    }

    /// Remove a name in place, keeping the order of the remaining entries.
    /// Removing an unknown name is a no-op.
    pub fn remove_staff(&self, command: RemoveStaffCommand) -> Result<Vec<String>> {
        let name = command.name.trim().to_uppercase();

        let snapshot = {
            let mut names = self.names.lock().unwrap();
            let before = names.len();
            names.retain(|n| n != &name);
            if names.len() == before {
                warn!("Staff name '{}' not on the roster", name);
                return Ok(names.clone());
            }
            names.clone()
        };
        self.persist(&snapshot)?;

        info!("Removed staff '{}' ({} on roster)", name, snapshot.len());
        Ok(snapshot)
    }

    /// Replace the whole roster (sync pull).
    pub fn replace(&self, new_names: Vec<String>) -> Result<()> {
        info!("Replacing roster from sync payload ({} names)", new_names.len());
        {
            let mut names = self.names.lock().unwrap();
            *names = new_names.clone();
        }
        self.persist(&new_names)
    }

    fn default_names() -> Vec<String> {
        shared::DEFAULT_STAFF_NAMES
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    fn persist(&self, names: &[String]) -> Result<()> {
        let json = serde_json::to_string(names).context("Failed to serialize roster")?;
        self.settings
            .save(keys::STAFF_NAMES, &json)
            .context("Failed to persist roster")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonConnection, SettingsRepository};
    use tempfile::TempDir;

    fn setup_service() -> (RosterService, Arc<SettingsRepository>, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        let settings = Arc::new(SettingsRepository::new(connection));
        let service = RosterService::new(settings.clone()).unwrap();
        (service, settings, temp_dir)
    }

    fn add(name: &str) -> AddStaffCommand {
        AddStaffCommand {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_seeds_default_roster() {
        let (service, _settings, _temp_dir) = setup_service();
        let names = service.list();
        assert_eq!(names.len(), shared::DEFAULT_STAFF_NAMES.len());
        assert_eq!(names[0], "NEUVILLE");
    }

    #[test]
    fn test_add_trims_and_uppercases() {
        let (service, _settings, _temp_dir) = setup_service();
        let names = service.add_staff(add("  dupont ")).unwrap();
        assert_eq!(names.last().unwrap(), "DUPONT");
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let (service, _settings, _temp_dir) = setup_service();
        let before = service.list();
        let after = service.add_staff(add("neuville")).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let (service, _settings, _temp_dir) = setup_service();
        assert!(service.add_staff(add("   ")).is_err());
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let (service, _settings, _temp_dir) = setup_service();
        let names = service
            .remove_staff(RemoveStaffCommand {
                name: "SUCCI".to_string(),
            })
            .unwrap();

        assert!(!names.contains(&"SUCCI".to_string()));
        assert_eq!(names[0], "NEUVILLE");
        assert_eq!(names[1], "CARASCO");
        assert_eq!(names[2], "HENRY");
    }

    #[test]
    fn test_roster_persists_across_restart() {
        let (service, settings, _temp_dir) = setup_service();
        service.add_staff(add("DUPONT")).unwrap();

        let reloaded = RosterService::new(settings).unwrap();
        assert!(reloaded.list().contains(&"DUPONT".to_string()));
    }
}
