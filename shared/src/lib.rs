use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single schedule cell: mission status code plus an optional free-text comment.
///
/// An empty status string means "no assignment"; a cell that is absent from the
/// store entirely is equivalent to an empty status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellData {
    /// Mission status code (e.g. "P", "ABS"); empty string means unassigned
    pub status: String,
    /// Optional free-text comment attached to this cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CellData {
    /// The canonical "no assignment" cell
    pub fn empty() -> Self {
        Self {
            status: String::new(),
            comment: None,
        }
    }

    /// True when the cell carries neither a status nor a comment
    pub fn is_empty(&self) -> bool {
        self.status.is_empty() && self.comment.is_none()
    }
}

impl Default for CellData {
    fn default() -> Self {
        Self::empty()
    }
}

/// Raw stored shape of a cell as found in persisted or synced documents.
///
/// Older documents stored a bare status string; newer ones store a structured
/// record. `normalize` collapses both into [`CellData`] so internal logic never
/// branches on representation. Cells are always written back in structured form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Structured record: `{ "status": "P", "comment": "..." }`
    Structured(CellData),
    /// Legacy shape: a bare status string such as `"P"`
    Legacy(String),
}

impl CellValue {
    /// Normalize an optional raw cell into canonical structured form.
    ///
    /// Absent cells normalize to the empty cell. Total, no failure mode.
    pub fn normalize(raw: Option<&CellValue>) -> CellData {
        match raw {
            Some(CellValue::Structured(data)) => data.clone(),
            Some(CellValue::Legacy(status)) => CellData {
                status: status.clone(),
                comment: None,
            },
            None => CellData::empty(),
        }
    }
}

impl From<CellData> for CellValue {
    fn from(data: CellData) -> Self {
        CellValue::Structured(data)
    }
}

/// One month of schedule data: per-staff cells plus day-level notes.
///
/// All maps are sparse; a missing staff or day entry is equivalent to an empty
/// cell, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    /// staff name -> day number (1-based) -> cell
    #[serde(default)]
    pub cells: BTreeMap<String, BTreeMap<u32, CellValue>>,
    /// day number (1-based) -> note attached to the whole day
    #[serde(default)]
    pub day_notes: BTreeMap<u32, String>,
}

/// The nested schedule mapping: year -> month (0-based, 0..11) -> month record.
///
/// serde_json renders the integer keys as JSON object keys, which keeps this
/// compatible with the historical document format.
pub type ScheduleData = BTreeMap<i32, BTreeMap<u32, MonthRecord>>;

/// A mission type: a short status code with display label and color tokens.
///
/// `is_system` entries are seeded defaults and cannot be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionType {
    pub code: String,
    pub label: String,
    /// Background color token for rendering
    pub bg: String,
    /// Text color token for rendering
    pub text: String,
    #[serde(default)]
    pub is_system: bool,
}

/// Descriptor for one calendar day of a month. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInfo {
    /// Date number within the month, 1..31
    pub date: u32,
    /// Fixed weekday label (e.g. "LUN.")
    pub day_name: String,
    /// True for Saturday and Sunday
    pub is_weekend: bool,
}

/// Annual tally of mission codes for one staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSummary {
    pub name: String,
    /// Count of assigned days, excluding the "ABS" code
    pub total: u32,
    /// Per-mission-code day counts (known non-empty codes only)
    pub per_code: BTreeMap<String, u32>,
}

/// Full-state document exchanged with the sync endpoint.
///
/// On pull only `scheduleData` is required; roster and registry are applied
/// when present. On push every field is filled and `lastSync` carries an
/// RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_types: Option<Vec<MissionType>>,
    pub schedule_data: ScheduleData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<String>,
}

/// Exported backup document: the three top-level state containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub staff_names: Vec<String>,
    pub mission_types: Vec<MissionType>,
    pub schedule_data: ScheduleData,
}

/// Request to write a single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCellRequest {
    pub year: i32,
    pub month: u32,
    pub name: String,
    pub day: u32,
    pub status: String,
    /// When omitted, the prior comment at this coordinate is carried over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One entry of a bulk update; comments are always carried over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellUpdateEntry {
    pub name: String,
    pub day: u32,
    pub status: String,
}

/// Request to apply one status to a rectangular multi-cell selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateRequest {
    pub year: i32,
    pub month: u32,
    pub updates: Vec<CellUpdateEntry>,
}

/// Response after a bulk update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateResponse {
    pub updated_count: u32,
}

/// Request to set or clear (empty string) a day-level note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayNoteRequest {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub note: String,
}

/// Query parameters identifying one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

/// Full view of one month: day descriptors, normalized cells, notes and
/// per-day headcounts, ready for grid rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthScheduleResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayInfo>,
    /// staff name -> day -> normalized cell
    pub cells: BTreeMap<String, BTreeMap<u32, CellData>>,
    pub day_notes: BTreeMap<u32, String>,
    /// Per-day count of staffed (non-empty, non-"ABS") cells, aligned with `days`
    pub daily_totals: Vec<u32>,
}

/// Annual summary for every staff member on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub year: i32,
    pub summaries: Vec<StaffSummary>,
}

/// Request to append a staff name to the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddStaffRequest {
    pub name: String,
}

/// Request to configure the sync endpoint URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncEndpointRequest {
    pub url: String,
}

/// Result of a completed pull from the sync endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPullResponse {
    pub roster_replaced: bool,
    pub missions_replaced: bool,
    pub success_message: String,
}

/// Result of a completed push to the sync endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPushResponse {
    pub last_sync: String,
    pub success_message: String,
}

/// Downloadable backup rendered as a pretty-printed JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub filename: String,
    pub content: String,
}

/// Seed roster used when no roster has been persisted yet.
pub const DEFAULT_STAFF_NAMES: [&str; 10] = [
    "NEUVILLE", "CARASCO", "SUCCI", "HENRY", "VOGEL", "GARCIA", "OLIVE", "BELBEZE", "PIOTELAT",
    "HUON",
];
