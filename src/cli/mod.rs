//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod invoice;

pub use account::{handle_account_command, AccountCommands};
pub use invoice::{handle_invoice_command, InvoiceCommands};
