//! Display formatting for terminal output
//!
//! Renders the stores as tables for the CLI.

pub mod account;
pub mod invoice;

pub use account::{format_account_details, format_account_list};
pub use invoice::format_invoice_list;
