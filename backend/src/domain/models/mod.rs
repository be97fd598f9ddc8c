//! Domain model types for the shift planner.

pub mod schedule;

pub use schedule::*;
