//! User settings for nfe-cli
//!
//! Holds the cosmetic theme preference and the process-wide fallback
//! operation nature used when an account has none of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::paths::NfePaths;
use crate::error::NfeError;
use crate::models::DEFAULT_OPERATION_NATURE;

/// Display theme. Purely cosmetic, it never touches the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Clam,
    Alt,
    Default,
    Classic,
}

impl Theme {
    /// Parse a theme from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clam" => Some(Self::Clam),
            "alt" => Some(Self::Alt),
            "default" => Some(Self::Default),
            "classic" => Some(Self::Classic),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clam => write!(f, "clam"),
            Self::Alt => write!(f, "alt"),
            Self::Default => write!(f, "default"),
            Self::Classic => write!(f, "classic"),
        }
    }
}

/// User settings for nfe-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of config.json
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub theme: Theme,

    /// Operation nature used for accounts without their own default
    #[serde(default = "default_operation_nature")]
    pub default_operation_nature: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_operation_nature() -> String {
    DEFAULT_OPERATION_NATURE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: Theme::default(),
            default_operation_nature: default_operation_nature(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &NfePaths) -> Result<Self, NfeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| NfeError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                NfeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &NfePaths) -> Result<(), NfeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| NfeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| NfeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
