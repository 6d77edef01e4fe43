//! Path management for nfe-cli
//!
//! ## Path Resolution Order
//!
//! 1. `NFE_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/nfe-cli` on Linux, `%APPDATA%\nfe-cli\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::NfeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "NFE_CLI_DATA_DIR";

/// Manages all paths used by nfe-cli
#[derive(Debug, Clone)]
pub struct NfePaths {
    base_dir: PathBuf,
}

impl NfePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, NfeError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "nfe-cli")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    NfeError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create NfePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the two XML stores
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Account store file. The name is kept from the files the desktop
    /// tool already writes, so existing stores are picked up as-is.
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("log.xml")
    }

    /// Invoice history file
    pub fn invoices_file(&self) -> PathBuf {
        self.data_dir().join("historico_nfe.xml")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), NfeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| NfeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| NfeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
