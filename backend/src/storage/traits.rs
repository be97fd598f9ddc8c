//! # Storage Traits
//!
//! Storage abstraction for the planner's persisted state. The core treats
//! persistence as opaque key/value storage over a handful of fixed logical
//! keys with last-write-wins semantics per key, no transactions.

use anyhow::Result;

/// Fixed logical keys the planner persists under.
pub mod keys {
    /// Saved UI role ("admin" or "user"); written by the surrounding UI
    pub const ROLE: &str = "role";
    /// The full nested schedule document (JSON)
    pub const SCHEDULE_DATA: &str = "schedule_data";
    /// Ordered staff roster (JSON array)
    pub const STAFF_NAMES: &str = "staff_names";
    /// Mission type registry (JSON array)
    pub const MISSION_TYPES: &str = "mission_types";
    /// Configured sync endpoint URL (raw string)
    pub const SYNC_ENDPOINT: &str = "sync_endpoint";
}

/// Trait defining the interface for key/value settings storage.
///
/// This abstracts away the specific storage medium so the domain layer can
/// work with different backends (JSON files, a browser-style store, an
/// in-memory map for tests) without modification.
pub trait SettingsStorage: Send + Sync {
    /// Load the value stored under `key`, or `None` when absent
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<()>;
}
