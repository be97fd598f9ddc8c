//! File-based JSON storage backend.

pub mod connection;
pub mod settings_repository;

pub use connection::JsonConnection;
pub use settings_repository::SettingsRepository;
