//! # Domain Module
//!
//! Contains all business logic for the shift planner application.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how schedules are modeled, edited, and aggregated. It operates
//! independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **models**: The sparse schedule store and its pure edit operations
//! - **schedule_service**: Cell, bulk, and day-note writes with persistence
//! - **selection**: The rectangular drag-selection state machine
//! - **calendar**: Month metadata (day counts, weekday labels, navigation)
//! - **roster_service**: The ordered staff roster
//! - **mission_service**: The mission type registry (valid status codes)
//! - **summary**: Annual per-staff tallies and per-day headcounts
//! - **sync_service**: Push/pull against a remote sync endpoint
//! - **export_service**: Backup document assembly for download
//!
//! ## Business Rules
//!
//! - Schedule edits never mutate in place: every operation yields a new store
//! - Invalid coordinates reject the whole operation, bulk writes included
//! - Writing a cell without a comment preserves any comment already there
//! - The roster holds unique uppercase names in stable display order
//! - Mission codes are unique and system entries cannot be deleted
//! - The absent code counts in its own column but never toward totals

pub mod calendar;
pub mod commands;
pub mod export_service;
pub mod mission_service;
pub mod models;
pub mod roster_service;
pub mod schedule_service;
pub mod selection;
pub mod summary;
pub mod sync_service;

pub use calendar::*;
pub use export_service::*;
pub use mission_service::*;
pub use roster_service::*;
pub use schedule_service::*;
pub use selection::*;
pub use summary::*;
pub use sync_service::*;
