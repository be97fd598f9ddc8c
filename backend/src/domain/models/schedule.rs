//! # Schedule Store
//!
//! The nested schedule mapping at the heart of the planner:
//! year -> month -> { cells: staff -> day -> cell, dayNotes: day -> note }.
//!
//! All mutating operations are pure: they take `&self` and return a new store
//! value, leaving the previous value untouched. Keys are sparse: a missing
//! year, month, staff or day entry reads as an empty cell, never as an error.

use shared::{CellData, CellValue, MonthRecord, ScheduleData};
use std::collections::BTreeMap;

/// Months are 0-indexed (0 = January), matching the historical document format.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Highest day number a month can hold.
const MAX_DAY: u32 = 31;

/// Errors raised by direct schedule writes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Malformed coordinate on a cell or day-note write; the store is unchanged.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// One entry of a bulk cell update. Comments are never supplied in bulk;
/// the prior comment at each coordinate is carried over.
#[derive(Debug, Clone, PartialEq)]
pub struct CellUpdate {
    pub staff: String,
    pub day: u32,
    pub status: String,
}

/// Immutable-update schedule store.
///
/// Serializes transparently as the nested year/month document so persisted
/// blobs and sync payloads share one shape.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ScheduleStore {
    years: ScheduleData,
}

impl ScheduleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the raw nested mapping (for serialization and export).
    pub fn years(&self) -> &ScheduleData {
        &self.years
    }

    /// Return a new store with the target cell set to `{status, comment}`.
    ///
    /// When `comment` is `None` the prior comment at that coordinate is
    /// carried over; an explicit empty comment clears it. Every other path in
    /// the store is left exactly as it was.
    pub fn upsert_cell(
        &self,
        year: i32,
        month: u32,
        staff: &str,
        day: u32,
        status: &str,
        comment: Option<String>,
    ) -> Result<Self, ScheduleError> {
        Self::validate_month(month)?;
        Self::validate_cell_coordinate(staff, day)?;

        let mut next = self.clone();
        let staff_cells = next
            .years
            .entry(year)
            .or_default()
            .entry(month)
            .or_default()
            .cells
            .entry(staff.to_string())
            .or_default();

        let resolved = match comment {
            Some(text) => Self::clean_comment(text),
            None => CellValue::normalize(staff_cells.get(&day)).comment,
        };
        staff_cells.insert(
            day,
            CellData {
                status: status.to_string(),
                comment: resolved,
            }
            .into(),
        );
        Ok(next)
    }

    /// Apply a sequence of cell updates as one batched structural update.
    ///
    /// Behaviorally equivalent to left-folding [`ScheduleStore::upsert_cell`]
    /// over `updates` in order: duplicates resolve last-write-wins and every
    /// update carries over the comment found at its coordinate. The batch is
    /// atomic: all coordinates are validated before anything is written, so a
    /// rejected batch changes nothing.
    pub fn bulk_upsert_cells(
        &self,
        year: i32,
        month: u32,
        updates: &[CellUpdate],
    ) -> Result<Self, ScheduleError> {
        Self::validate_month(month)?;
        for update in updates {
            Self::validate_cell_coordinate(&update.staff, update.day)?;
        }

        // an empty batch is the identity and must not allocate a month record
        if updates.is_empty() {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let month_record = next.years.entry(year).or_default().entry(month).or_default();
        for update in updates {
            let staff_cells = month_record.cells.entry(update.staff.clone()).or_default();
            let carried = CellValue::normalize(staff_cells.get(&update.day)).comment;
            staff_cells.insert(
                update.day,
                CellData {
                    status: update.status.clone(),
                    comment: carried,
                }
                .into(),
            );
        }
        Ok(next)
    }

    /// Return a new store with the note for `day` set, or cleared when `note`
    /// is empty. Independent of cell data.
    pub fn upsert_day_note(
        &self,
        year: i32,
        month: u32,
        day: u32,
        note: &str,
    ) -> Result<Self, ScheduleError> {
        Self::validate_month(month)?;
        Self::validate_day(day)?;

        let mut next = self.clone();
        if note.is_empty() {
            // clearing an absent note must not allocate a month record
            if let Some(record) = next
                .years
                .get_mut(&year)
                .and_then(|months| months.get_mut(&month))
            {
                record.day_notes.remove(&day);
            }
        } else {
            next.years
                .entry(year)
                .or_default()
                .entry(month)
                .or_default()
                .day_notes
                .insert(day, note.to_string());
        }
        Ok(next)
    }

    /// Read one cell in normalized form. Total: missing keys read as the
    /// empty cell.
    pub fn get_cell(&self, year: i32, month: u32, staff: &str, day: u32) -> CellData {
        let raw = self
            .years
            .get(&year)
            .and_then(|months| months.get(&month))
            .and_then(|record| record.cells.get(staff))
            .and_then(|days| days.get(&day));
        CellValue::normalize(raw)
    }

    /// Read one month record. Total: missing keys read as an empty record.
    pub fn get_month(&self, year: i32, month: u32) -> MonthRecord {
        self.years
            .get(&year)
            .and_then(|months| months.get(&month))
            .cloned()
            .unwrap_or_default()
    }

    /// Read the note attached to a day, if any.
    pub fn get_day_note(&self, year: i32, month: u32, day: u32) -> Option<String> {
        self.years
            .get(&year)
            .and_then(|months| months.get(&month))
            .and_then(|record| record.day_notes.get(&day))
            .cloned()
    }

    /// One month of cells with every value normalized to [`CellData`].
    pub fn normalized_cells(
        &self,
        year: i32,
        month: u32,
    ) -> BTreeMap<String, BTreeMap<u32, CellData>> {
        self.get_month(year, month)
            .cells
            .iter()
            .map(|(staff, days)| {
                let normalized = days
                    .iter()
                    .map(|(day, raw)| (*day, CellValue::normalize(Some(raw))))
                    .collect();
                (staff.clone(), normalized)
            })
            .collect()
    }

    fn validate_month(month: u32) -> Result<(), ScheduleError> {
        if month >= MONTHS_PER_YEAR {
            return Err(ScheduleError::InvalidCoordinate(format!(
                "month {} is out of range (expected 0..{})",
                month,
                MONTHS_PER_YEAR - 1
            )));
        }
        Ok(())
    }

    fn validate_day(day: u32) -> Result<(), ScheduleError> {
        if day == 0 || day > MAX_DAY {
            return Err(ScheduleError::InvalidCoordinate(format!(
                "day {} is out of range (expected 1..{})",
                day, MAX_DAY
            )));
        }
        Ok(())
    }

    fn validate_cell_coordinate(staff: &str, day: u32) -> Result<(), ScheduleError> {
        if staff.trim().is_empty() {
            return Err(ScheduleError::InvalidCoordinate(
                "staff name cannot be empty".to_string(),
            ));
        }
        Self::validate_day(day)
    }

    fn clean_comment(text: String) -> Option<String> {
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl From<ScheduleData> for ScheduleStore {
    fn from(years: ScheduleData) -> Self {
        Self { years }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(staff: &str, day: u32, status: &str) -> CellUpdate {
        CellUpdate {
            staff: staff.to_string(),
            day,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_upsert_cell_sets_status_and_comment() {
        let store = ScheduleStore::new();
        let next = store
            .upsert_cell(2024, 3, "NEUVILLE", 15, "P", Some("late start".to_string()))
            .unwrap();

        let cell = next.get_cell(2024, 3, "NEUVILLE", 15);
        assert_eq!(cell.status, "P");
        assert_eq!(cell.comment, Some("late start".to_string()));

        // the original store is untouched
        assert_eq!(store.get_cell(2024, 3, "NEUVILLE", 15), CellData::empty());
    }

    #[test]
    fn test_upsert_cell_non_interference() {
        let base = ScheduleStore::new()
            .upsert_cell(2024, 3, "NEUVILLE", 1, "P", None)
            .unwrap()
            .upsert_cell(2024, 4, "CARASCO", 2, "AST", Some("on call".to_string()))
            .unwrap()
            .upsert_cell(2023, 11, "NEUVILLE", 31, "NN", None)
            .unwrap();

        let next = base.upsert_cell(2024, 3, "NEUVILLE", 2, "ABS", None).unwrap();

        // every other coordinate reads the same as before
        assert_eq!(
            next.get_cell(2024, 3, "NEUVILLE", 1),
            base.get_cell(2024, 3, "NEUVILLE", 1)
        );
        assert_eq!(
            next.get_cell(2024, 4, "CARASCO", 2),
            base.get_cell(2024, 4, "CARASCO", 2)
        );
        assert_eq!(
            next.get_cell(2023, 11, "NEUVILLE", 31),
            base.get_cell(2023, 11, "NEUVILLE", 31)
        );
        assert_eq!(next.get_month(2024, 4), base.get_month(2024, 4));
        assert_eq!(next.get_cell(2024, 3, "NEUVILLE", 2).status, "ABS");
    }

    #[test]
    fn test_comment_carry_over() {
        let store = ScheduleStore::new()
            .upsert_cell(2024, 0, "HENRY", 10, "P", Some("note".to_string()))
            .unwrap()
            .upsert_cell(2024, 0, "HENRY", 10, "ABS", None)
            .unwrap();

        let cell = store.get_cell(2024, 0, "HENRY", 10);
        assert_eq!(cell.status, "ABS");
        assert_eq!(cell.comment, Some("note".to_string()));
    }

    #[test]
    fn test_explicit_empty_comment_clears() {
        let store = ScheduleStore::new()
            .upsert_cell(2024, 0, "HENRY", 10, "P", Some("note".to_string()))
            .unwrap()
            .upsert_cell(2024, 0, "HENRY", 10, "P", Some(String::new()))
            .unwrap();

        assert_eq!(store.get_cell(2024, 0, "HENRY", 10).comment, None);
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let store = ScheduleStore::new();

        assert!(matches!(
            store.upsert_cell(2024, 3, "", 15, "P", None),
            Err(ScheduleError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            store.upsert_cell(2024, 3, "   ", 15, "P", None),
            Err(ScheduleError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            store.upsert_cell(2024, 3, "NEUVILLE", 0, "P", None),
            Err(ScheduleError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            store.upsert_cell(2024, 3, "NEUVILLE", 32, "P", None),
            Err(ScheduleError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            store.upsert_cell(2024, 12, "NEUVILLE", 15, "P", None),
            Err(ScheduleError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_bulk_equals_fold_of_single_upserts() {
        let base = ScheduleStore::new()
            .upsert_cell(2024, 5, "VOGEL", 3, "P", Some("existing".to_string()))
            .unwrap();

        let updates = vec![
            update("VOGEL", 3, "AST"),
            update("GARCIA", 3, "P"),
            update("VOGEL", 4, "NS"),
            // duplicate coordinate: last write wins
            update("GARCIA", 3, "ABS"),
        ];

        let bulk = base.bulk_upsert_cells(2024, 5, &updates).unwrap();

        let folded = updates.iter().try_fold(base.clone(), |store, u| {
            store.upsert_cell(2024, 5, &u.staff, u.day, &u.status, None)
        });
        assert_eq!(bulk, folded.unwrap());

        assert_eq!(bulk.get_cell(2024, 5, "GARCIA", 3).status, "ABS");
        // comment survives the bulk status rewrite
        assert_eq!(
            bulk.get_cell(2024, 5, "VOGEL", 3).comment,
            Some("existing".to_string())
        );
    }

    #[test]
    fn test_empty_bulk_is_identity() {
        let base = ScheduleStore::new()
            .upsert_cell(2024, 3, "NEUVILLE", 15, "P", None)
            .unwrap();

        let next = base.bulk_upsert_cells(2024, 5, &[]).unwrap();
        assert_eq!(next, base);
        // no phantom month record appears in the serialized document
        assert_eq!(
            serde_json::to_string(&next).unwrap(),
            serde_json::to_string(&base).unwrap()
        );

        let on_empty = ScheduleStore::new().bulk_upsert_cells(2024, 5, &[]).unwrap();
        assert_eq!(on_empty, ScheduleStore::new());
    }

    #[test]
    fn test_clearing_absent_day_note_is_identity() {
        let base = ScheduleStore::new();
        let next = base.upsert_day_note(2024, 3, 15, "").unwrap();
        assert_eq!(next, base);
        assert!(next.years().is_empty());
    }

    #[test]
    fn test_bulk_is_atomic_on_rejection() {
        let base = ScheduleStore::new();
        let updates = vec![update("VOGEL", 3, "P"), update("", 4, "P")];

        let result = base.bulk_upsert_cells(2024, 5, &updates);
        assert!(matches!(result, Err(ScheduleError::InvalidCoordinate(_))));
        // nothing was applied, not even the valid first entry
        assert_eq!(base.get_cell(2024, 5, "VOGEL", 3), CellData::empty());
    }

    #[test]
    fn test_day_note_set_and_clear() {
        let store = ScheduleStore::new()
            .upsert_day_note(2024, 3, 15, "Holiday")
            .unwrap();

        assert_eq!(store.get_day_note(2024, 3, 15), Some("Holiday".to_string()));
        assert_eq!(store.get_day_note(2024, 3, 16), None);

        let cleared = store.upsert_day_note(2024, 3, 15, "").unwrap();
        assert_eq!(cleared.get_day_note(2024, 3, 15), None);
        // clearing leaves cell data alone
        assert_eq!(cleared.get_month(2024, 3).cells, store.get_month(2024, 3).cells);
    }

    #[test]
    fn test_day_note_independent_of_cells() {
        let store = ScheduleStore::new()
            .upsert_cell(2024, 3, "NEUVILLE", 15, "P", None)
            .unwrap()
            .upsert_day_note(2024, 3, 15, "Inspection")
            .unwrap();

        assert_eq!(store.get_cell(2024, 3, "NEUVILLE", 15).status, "P");
        assert_eq!(
            store.get_day_note(2024, 3, 15),
            Some("Inspection".to_string())
        );
    }

    #[test]
    fn test_reads_are_total() {
        let store = ScheduleStore::new();
        assert_eq!(store.get_cell(1999, 0, "NOBODY", 1), CellData::empty());
        assert_eq!(store.get_month(1999, 0), MonthRecord::default());
        assert_eq!(store.get_day_note(1999, 0, 1), None);
    }

    #[test]
    fn test_normalized_cells_collapses_legacy_shape() {
        let json = r#"{"2024":{"3":{"cells":{"NEUVILLE":{"15":"P","16":{"status":"ABS","comment":"sick"}}}}}}"#;
        let store: ScheduleStore = serde_json::from_str(json).unwrap();

        let cells = store.normalized_cells(2024, 3);
        let days = cells.get("NEUVILLE").unwrap();
        assert_eq!(days.get(&15).unwrap().status, "P");
        assert_eq!(days.get(&15).unwrap().comment, None);
        assert_eq!(days.get(&16).unwrap().comment, Some("sick".to_string()));
    }

    #[test]
    fn test_store_round_trips_through_json() {
        let store = ScheduleStore::new()
            .upsert_cell(2024, 3, "NEUVILLE", 15, "P", Some("note".to_string()))
            .unwrap()
            .upsert_day_note(2024, 3, 15, "Holiday")
            .unwrap();

        let json = serde_json::to_string(&store).unwrap();
        let back: ScheduleStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
