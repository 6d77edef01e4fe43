//! Audit logging for nfe-cli
//!
//! Every account create/update and every invoice issuance is recorded in an
//! append-only, line-delimited JSON log (`audit.log`). Passwords never reach
//! the log: the account constructors mask them.
//!
//! ```rust,ignore
//! use nfe_cli::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::account_created(&account))?;
//! logger.log(&AuditEntry::invoice_issued(position, &invoice))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
