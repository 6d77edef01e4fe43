//! Storage layer for nfe-cli
//!
//! Two independent flat XML stores: the account store and the invoice
//! history. Every operation reads the whole file, mutates in memory and
//! writes the whole file back; nothing is cached between calls.
//!
//! There is no locking. If two processes write the same store at once the
//! second writer overwrites whatever the first one added (lost update).
//! This is an accepted limitation of the single-user tool.

pub mod accounts;
pub mod invoices;
pub mod xml_io;

pub use accounts::AccountRepository;
pub use invoices::InvoiceRepository;
pub use xml_io::{read_xml, write_xml_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::NfePaths;
use crate::error::NfeError;

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    paths: NfePaths,
    pub accounts: AccountRepository,
    pub invoices: InvoiceRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance rooted at `paths`
    pub fn new(paths: NfePaths) -> Result<Self, NfeError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            invoices: InvoiceRepository::new(paths.invoices_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &NfePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Create empty store files for any that do not exist yet
    pub fn initialize(&self) -> Result<(), NfeError> {
        if self.accounts.ensure_exists()? {
            tracing::info!(path = %self.accounts.path().display(), "created account store");
        }
        if self.invoices.ensure_exists()? {
            tracing::info!(path = %self.invoices.path().display(), "created invoice history");
        }
        Ok(())
    }

    /// Append `entry` to the audit log.
    ///
    /// The store write it describes has already happened, so a failure here
    /// is reported as a warning and not returned.
    pub fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.log(&entry) {
            tracing::warn!(error = %e, entity_id = %entry.entity_id, "failed to write audit entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::Account;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NfePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.paths().accounts_file().exists());
    }

    #[test]
    fn test_initialize_creates_empty_stores() {
        let (_temp_dir, storage) = create_test_storage();

        storage.initialize().unwrap();

        assert!(storage.paths().accounts_file().exists());
        assert!(storage.paths().invoices_file().exists());
        assert!(storage.accounts.load().is_empty());
        assert!(storage.invoices.load().is_empty());
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .accounts
            .save(&[Account::new("ana", "111", "p", "SP")])
            .unwrap();

        storage.initialize().unwrap();

        assert_eq!(storage.accounts.load().len(), 1);
    }

    #[test]
    fn test_record_update_with_diff() {
        let (_temp_dir, storage) = create_test_storage();
        let before = Account::new("ana", "111", "p", "SP");
        let mut after = before.clone();
        after.city = "RJ".into();

        storage.record(AuditEntry::account_updated(&before, &after));

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(
            entries[0].diff_summary.as_deref(),
            Some("cidade: \"SP\" -> \"RJ\"")
        );
    }
}
