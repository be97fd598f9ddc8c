//! # JSON Connection
//!
//! Connection type for the file-based JSON storage backend. Holds the base
//! data directory and hands out per-key file paths; repositories built on
//! this connection manage their own files.

use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Connection to a directory of JSON settings files.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at `base_directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)?;
            info!("Created data directory: {:?}", base_directory);
        }
        Ok(Self { base_directory })
    }

    /// The root directory all settings files live under.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File path backing one logical settings key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}
