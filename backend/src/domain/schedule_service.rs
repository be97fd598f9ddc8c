//! Schedule service: owns the in-memory schedule store and persists it.
//!
//! The in-memory store is the source of truth. Every mutation applies one of
//! the pure store operations, swaps the new value in, then writes the
//! serialized document to storage under the `schedule_data` key. Validation
//! happens inside the pure operations, so a rejected write never touches the
//! store or the persisted document.

use anyhow::{Context, Result};
use log::{info, warn};
use shared::{CellData, MonthRecord};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::commands::schedule::{BulkUpdateCommand, DayNoteCommand, UpdateCellCommand};
use crate::domain::models::schedule::ScheduleStore;
use crate::storage::{keys, SettingsStorage};

/// Service for reading and mutating the schedule store.
#[derive(Clone)]
pub struct ScheduleService {
    store: Arc<Mutex<ScheduleStore>>,
    settings: Arc<dyn SettingsStorage>,
}

impl ScheduleService {
    /// Create the service, loading any persisted schedule document.
    ///
    /// A corrupt document is logged and replaced with an empty store rather
    /// than refusing to start.
    pub fn new(settings: Arc<dyn SettingsStorage>) -> Result<Self> {
        let store = match settings.load(keys::SCHEDULE_DATA)? {
            Some(json) => match serde_json::from_str::<ScheduleStore>(&json) {
                Ok(store) => {
                    info!("Loaded schedule data ({} bytes)", json.len());
                    store
                }
                Err(e) => {
                    warn!("Stored schedule data is unreadable, starting empty: {}", e);
                    ScheduleStore::new()
                }
            },
            None => {
                info!("No schedule data stored yet, starting empty");
                ScheduleStore::new()
            }
        };

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            settings,
        })
    }

    /// Write one cell and return its resulting normalized value.
    pub fn update_cell(&self, command: UpdateCellCommand) -> Result<CellData> {
        info!(
            "Updating cell {}/{} {} day {} -> '{}'",
            command.year, command.month, command.staff, command.day, command.status
        );

        let snapshot = {
            let mut store = self.store.lock().unwrap();
            let next = store.upsert_cell(
                command.year,
                command.month,
                &command.staff,
                command.day,
                &command.status,
                command.comment,
            )?;
            *store = next;
            store.clone()
        };
        self.persist(&snapshot)?;

        Ok(snapshot.get_cell(command.year, command.month, &command.staff, command.day))
    }

    /// Apply a bulk update (one status over a confirmed selection) and return
    /// the number of updates applied.
    pub fn bulk_update(&self, command: BulkUpdateCommand) -> Result<usize> {
        info!(
            "Bulk updating {} cells in {}/{}",
            command.updates.len(),
            command.year,
            command.month
        );

        let snapshot = {
            let mut store = self.store.lock().unwrap();
            let next = store.bulk_upsert_cells(command.year, command.month, &command.updates)?;
            *store = next;
            store.clone()
        };
        self.persist(&snapshot)?;

        Ok(command.updates.len())
    }

    /// Set or clear (empty string) a day-level note.
    pub fn update_day_note(&self, command: DayNoteCommand) -> Result<()> {
        info!(
            "Updating day note {}/{} day {}",
            command.year, command.month, command.day
        );

        let snapshot = {
            let mut store = self.store.lock().unwrap();
            let next =
                store.upsert_day_note(command.year, command.month, command.day, &command.note)?;
            *store = next;
            store.clone()
        };
        self.persist(&snapshot)?;

        Ok(())
    }

    /// Read one cell in normalized form (total, defaults for missing keys).
    pub fn get_cell(&self, year: i32, month: u32, staff: &str, day: u32) -> CellData {
        self.store.lock().unwrap().get_cell(year, month, staff, day)
    }

    /// Read one month record (total, empty record for missing keys).
    pub fn get_month(&self, year: i32, month: u32) -> MonthRecord {
        self.store.lock().unwrap().get_month(year, month)
    }

    /// One month of cells with legacy values normalized.
    pub fn normalized_cells(&self, year: i32, month: u32) -> BTreeMap<String, BTreeMap<u32, CellData>> {
        self.store.lock().unwrap().normalized_cells(year, month)
    }

    /// Snapshot of the full store (for aggregation, export and sync push).
    pub fn snapshot(&self) -> ScheduleStore {
        self.store.lock().unwrap().clone()
    }

    /// Replace the entire store (sync pull). The swap is unconditional:
    /// last call wins.
    pub fn replace_store(&self, new_store: ScheduleStore) -> Result<()> {
        info!("Replacing schedule store from sync payload");
        {
            let mut store = self.store.lock().unwrap();
            *store = new_store.clone();
        }
        self.persist(&new_store)
    }

    fn persist(&self, store: &ScheduleStore) -> Result<()> {
        let json = serde_json::to_string(store).context("Failed to serialize schedule data")?;
        self.settings
            .save(keys::SCHEDULE_DATA, &json)
            .context("Failed to persist schedule data")
    }
}
