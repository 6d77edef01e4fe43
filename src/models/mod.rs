//! Core data models for nfe-cli
//!
//! Accounts (client profiles keyed by tax ID) and the invoices issued
//! against them.

pub mod account;
pub mod invoice;

pub use account::{Account, AccountUpdate, AccountValidationError, DEFAULT_OPERATION_NATURE};
pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus, InvoiceValidationError};
