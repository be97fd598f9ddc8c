//! Domain-level command and query types
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod schedule {
    use crate::domain::models::schedule::CellUpdate;

    /// Input for writing a single cell.
    #[derive(Debug, Clone)]
    pub struct UpdateCellCommand {
        pub year: i32,
        pub month: u32,
        pub staff: String,
        pub day: u32,
        pub status: String,
        /// `None` carries the prior comment over; an empty string clears it
        pub comment: Option<String>,
    }

    /// Input for applying one status to a confirmed multi-cell selection.
    #[derive(Debug, Clone)]
    pub struct BulkUpdateCommand {
        pub year: i32,
        pub month: u32,
        pub updates: Vec<CellUpdate>,
    }

    /// Input for setting or clearing a day-level note.
    #[derive(Debug, Clone)]
    pub struct DayNoteCommand {
        pub year: i32,
        pub month: u32,
        pub day: u32,
        pub note: String,
    }
}

pub mod roster {
    /// Input for appending a staff name to the roster.
    #[derive(Debug, Clone)]
    pub struct AddStaffCommand {
        pub name: String,
    }

    /// Input for removing a staff name from the roster.
    #[derive(Debug, Clone)]
    pub struct RemoveStaffCommand {
        pub name: String,
    }
}

pub mod missions {
    use shared::MissionType;

    /// Input for registering a new mission type.
    #[derive(Debug, Clone)]
    pub struct AddMissionCommand {
        pub mission: MissionType,
    }

    /// Input for deleting a mission type by code.
    #[derive(Debug, Clone)]
    pub struct RemoveMissionCommand {
        pub code: String,
    }
}
