//! Configuration module for nfe-cli
//!
//! This module provides configuration management including:
//! - Platform path resolution for the store files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::NfePaths;
pub use settings::{Settings, Theme};
