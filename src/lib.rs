//! nfe-cli - client account registry and simulated NF-e issuance log
//!
//! Two flat XML stores on local disk: an account store keyed by tax ID
//! (CNPJ) and an append-only history of issued invoices. Both are read and
//! written whole on every operation.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: error types
//! - `models`: accounts and invoices
//! - `storage`: XML file storage layer
//! - `services`: store operations (validation, key checks)
//! - `audit`: append-only audit log
//! - `display`: table formatting
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use nfe_cli::config::NfePaths;
//! use nfe_cli::models::Account;
//! use nfe_cli::services::AccountService;
//! use nfe_cli::storage::Storage;
//!
//! let storage = Storage::new(NfePaths::new()?)?;
//! AccountService::new(&storage).create_account(Account::new("ana", "111", "p", "SP"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{NfeError, NfeResult};
