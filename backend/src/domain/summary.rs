//! Annual summary aggregation.
//!
//! Derives per-staff tallies per mission code from the schedule store for
//! reporting, plus the per-day headcount row shown under the grid. Pure
//! summation over the sparse store: missing cells contribute nothing and
//! iteration order never affects the result.

use shared::{MissionType, StaffSummary};
use std::collections::BTreeMap;

use crate::domain::calendar::CalendarService;
use crate::domain::models::schedule::{ScheduleStore, MONTHS_PER_YEAR};

/// Status code excluded from the `total` tally. The "absent" code still
/// counts in its own per-code column; this is a fixed domain convention.
pub const ABSENT_CODE: &str = "ABS";

/// Service deriving report tallies from the schedule store.
#[derive(Clone, Default)]
pub struct SummaryService {
    calendar: CalendarService,
}

impl SummaryService {
    /// Create a new SummaryService instance
    pub fn new() -> Self {
        Self {
            calendar: CalendarService::new(),
        }
    }

    /// Annual tally for every staff member on the roster.
    ///
    /// For each day of each month of `year`: the cell's normalized status
    /// increments its per-code counter when the code is a known non-empty
    /// mission code, and increments `total` for any non-empty status except
    /// [`ABSENT_CODE`].
    pub fn summarize(
        &self,
        store: &ScheduleStore,
        year: i32,
        roster: &[String],
        missions: &[MissionType],
    ) -> Vec<StaffSummary> {
        let codes: Vec<&str> = missions
            .iter()
            .filter(|m| !m.code.is_empty())
            .map(|m| m.code.as_str())
            .collect();

        roster
            .iter()
            .map(|name| {
                let mut per_code: BTreeMap<String, u32> =
                    codes.iter().map(|c| (c.to_string(), 0)).collect();
                let mut total = 0;

                for month in 0..MONTHS_PER_YEAR {
                    for day in 1..=self.calendar.day_count(year, month) {
                        let status = store.get_cell(year, month, name, day).status;
                        if status.is_empty() {
                            continue;
                        }
                        if let Some(count) = per_code.get_mut(&status) {
                            *count += 1;
                        }
                        if status != ABSENT_CODE {
                            total += 1;
                        }
                    }
                }

                StaffSummary {
                    name: name.clone(),
                    total,
                    per_code,
                }
            })
            .collect()
    }

    /// Headcount for one day: how many roster members hold a non-empty,
    /// non-absent status.
    pub fn staffed_count(
        &self,
        store: &ScheduleStore,
        year: i32,
        month: u32,
        roster: &[String],
        day: u32,
    ) -> u32 {
        roster
            .iter()
            .filter(|name| {
                let status = store.get_cell(year, month, name, day).status;
                !status.is_empty() && status != ABSENT_CODE
            })
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MissionType;

    fn mission(code: &str) -> MissionType {
        MissionType {
            code: code.to_string(),
            label: code.to_string(),
            bg: String::new(),
            text: String::new(),
            is_system: true,
        }
    }

    fn missions() -> Vec<MissionType> {
        vec![mission("P"), mission("ABS"), mission("AST"), mission("")]
    }

    fn sample_store() -> ScheduleStore {
        ScheduleStore::new()
            .upsert_cell(2024, 0, "A", 1, "P", None)
            .unwrap()
            .upsert_cell(2024, 0, "A", 2, "ABS", None)
            .unwrap()
            .upsert_cell(2024, 5, "A", 10, "AST", None)
            .unwrap()
            .upsert_cell(2024, 0, "B", 1, "P", None)
            .unwrap()
            // unknown code still counts toward total
            .upsert_cell(2024, 1, "B", 3, "XYZ", None)
            .unwrap()
            // a different year never leaks into 2024 tallies
            .upsert_cell(2023, 0, "A", 1, "P", None)
            .unwrap()
    }

    #[test]
    fn test_summarize_counts_per_code_and_total() {
        let service = SummaryService::new();
        let roster = vec!["A".to_string(), "B".to_string()];

        let summaries = service.summarize(&sample_store(), 2024, &roster, &missions());

        let a = &summaries[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.per_code["P"], 1);
        assert_eq!(a.per_code["ABS"], 1);
        assert_eq!(a.per_code["AST"], 1);
        // ABS is excluded from the total
        assert_eq!(a.total, 2);

        let b = &summaries[1];
        assert_eq!(b.per_code["P"], 1);
        // unknown codes have no per-code column but count toward total
        assert!(!b.per_code.contains_key("XYZ"));
        assert_eq!(b.total, 2);
    }

    #[test]
    fn test_summarize_invariant_to_roster_order() {
        let service = SummaryService::new();
        let store = sample_store();

        let forward = service.summarize(
            &store,
            2024,
            &["A".to_string(), "B".to_string()],
            &missions(),
        );
        let backward = service.summarize(
            &store,
            2024,
            &["B".to_string(), "A".to_string()],
            &missions(),
        );

        assert_eq!(forward[0], backward[1]);
        assert_eq!(forward[1], backward[0]);
    }

    #[test]
    fn test_summarize_empty_store() {
        let service = SummaryService::new();
        let summaries = service.summarize(
            &ScheduleStore::new(),
            2024,
            &["A".to_string()],
            &missions(),
        );
        assert_eq!(summaries[0].total, 0);
        assert!(summaries[0].per_code.values().all(|&c| c == 0));
    }

    #[test]
    fn test_bulk_update_then_summarize_scenario() {
        use crate::domain::models::schedule::CellUpdate;

        let updates = vec![
            CellUpdate {
                staff: "A".to_string(),
                day: 1,
                status: "P".to_string(),
            },
            CellUpdate {
                staff: "B".to_string(),
                day: 1,
                status: "P".to_string(),
            },
            CellUpdate {
                staff: "A".to_string(),
                day: 2,
                status: "ABS".to_string(),
            },
        ];
        let store = ScheduleStore::new().bulk_upsert_cells(2024, 0, &updates).unwrap();

        let service = SummaryService::new();
        let roster = vec!["A".to_string(), "B".to_string()];
        let summaries = service.summarize(&store, 2024, &roster, &missions());

        assert!(summaries[0].total >= 1); // day 1 counted, day 2 excluded
        assert_eq!(summaries[0].total, 1);
        assert!(summaries[1].total >= 1);
    }

    #[test]
    fn test_staffed_count_excludes_absent_and_empty() {
        let service = SummaryService::new();
        let store = ScheduleStore::new()
            .upsert_cell(2024, 0, "A", 1, "P", None)
            .unwrap()
            .upsert_cell(2024, 0, "B", 1, "ABS", None)
            .unwrap()
            .upsert_cell(2024, 0, "C", 1, "", None)
            .unwrap();
        let roster = vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()];

        assert_eq!(service.staffed_count(&store, 2024, 0, &roster, 1), 1);
        assert_eq!(service.staffed_count(&store, 2024, 0, &roster, 2), 0);
    }
}
