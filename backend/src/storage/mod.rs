//! # Storage Module
//!
//! Data persistence for the shift planner. The domain layer only ever talks
//! to the [`SettingsStorage`] trait; the `json` backend implements it with
//! one file per logical key.

pub mod json;
pub mod traits;

pub use json::{JsonConnection, SettingsRepository};
pub use traits::{keys, SettingsStorage};
