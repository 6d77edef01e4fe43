//! Service layer for nfe-cli
//!
//! The service layer provides the store operations on top of the
//! repositories: validation, key checks and audit logging.

pub mod account;
pub mod invoice;

pub use account::AccountService;
pub use invoice::InvoiceService;
