//! # IO Module
//!
//! Provides the interface layer between the user interface and the domain
//! logic. It translates HTTP requests into domain operations and formats
//! domain responses for UI consumption; all business rules live below it.

pub mod rest;

pub use rest::*;
