//! # JSON Settings Repository
//!
//! File-based [`SettingsStorage`] implementation: one `<key>.json` file per
//! logical key under the connection's base directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── schedule_data.json
//! ├── staff_names.json
//! ├── mission_types.json
//! └── sync_endpoint.json
//! ```
//!
//! Writes use the atomic temp-file + rename pattern so a crash mid-write
//! never leaves a half-written value behind.

use anyhow::Result;
use log::debug;
use std::fs;

use super::connection::JsonConnection;
use crate::storage::traits::SettingsStorage;

/// JSON-file-backed settings repository.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    connection: JsonConnection,
}

impl SettingsRepository {
    /// Create a new settings repository on the given connection
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl SettingsStorage for SettingsRepository {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.connection.key_path(key);
        if !path.exists() {
            debug!("No stored value for key '{}'", key);
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?;
        debug!("Loaded key '{}' from {:?}", key, path);
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.connection.key_path(key);

        // Atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved key '{}' to {:?}", key, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (SettingsRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        (SettingsRepository::new(connection), temp_dir)
    }

    #[test]
    fn test_load_missing_key_returns_none() {
        let (repo, _temp_dir) = setup_test_repo();
        assert_eq!(repo.load("schedule_data").unwrap(), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.save("schedule_data", r#"{"2024":{}}"#).unwrap();
        assert_eq!(
            repo.load("schedule_data").unwrap(),
            Some(r#"{"2024":{}}"#.to_string())
        );
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.save("sync_endpoint", "https://old.example").unwrap();
        repo.save("sync_endpoint", "https://new.example").unwrap();
        assert_eq!(
            repo.load("sync_endpoint").unwrap(),
            Some("https://new.example".to_string())
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.save("staff_names", r#"["NEUVILLE"]"#).unwrap();
        assert_eq!(repo.load("mission_types").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reconnect() {
        let (repo, temp_dir) = setup_test_repo();
        repo.save("role", "admin").unwrap();

        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repo2 = SettingsRepository::new(connection);
        assert_eq!(repo2.load("role").unwrap(), Some("admin".to_string()));
    }
}
