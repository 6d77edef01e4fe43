//! Account service
//!
//! Create, read and update operations over the account store. Validation
//! and key uniqueness are enforced here so every caller gets them.

use crate::audit::AuditEntry;
use crate::error::{NfeError, NfeResult};
use crate::models::{Account, AccountUpdate, DEFAULT_OPERATION_NATURE};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
    fallback_nature: String,
}

impl<'a> AccountService<'a> {
    /// Create a new account service using the built-in fallback nature
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            fallback_nature: DEFAULT_OPERATION_NATURE.to_string(),
        }
    }

    /// Use `nature` for accounts that have no default of their own
    pub fn with_fallback_nature(mut self, nature: impl Into<String>) -> Self {
        self.fallback_nature = nature.into();
        self
    }

    /// All accounts in insertion order. A missing or unreadable store is empty.
    pub fn list_accounts(&self) -> Vec<Account> {
        self.storage.accounts.load()
    }

    /// Find the account with this tax ID (first match). Surrounding
    /// whitespace in `tax_id` is ignored.
    pub fn find_by_tax_id(&self, tax_id: &str) -> Option<Account> {
        let tax_id = tax_id.trim();
        self.storage
            .accounts
            .load()
            .into_iter()
            .find(|a| a.tax_id == tax_id)
    }

    /// Create a new account
    ///
    /// Fails with a validation error if a required field is empty and with
    /// a duplicate error if the tax ID is taken. The store is untouched on
    /// failure. Fields are trimmed before any check; the returned account is
    /// the record as stored.
    pub fn create_account(&self, account: Account) -> NfeResult<Account> {
        let account = account.normalized();
        account
            .validate()
            .map_err(|e| NfeError::Validation(e.to_string()))?;

        let mut accounts = self.storage.accounts.load();
        if accounts.iter().any(|a| a.tax_id == account.tax_id) {
            return Err(NfeError::duplicate_account(&account.tax_id));
        }

        accounts.push(account.clone());
        self.storage.accounts.save(&accounts)?;

        tracing::debug!(tax_id = %account.tax_id, "account created");
        self.storage.record(AuditEntry::account_created(&account));

        Ok(account)
    }

    /// Replace every field of the account except its tax ID.
    ///
    /// The record keeps its position in the store.
    pub fn update_account(&self, tax_id: &str, update: AccountUpdate) -> NfeResult<Account> {
        let tax_id = tax_id.trim();
        let update = update.normalized();
        update
            .validate()
            .map_err(|e| NfeError::Validation(e.to_string()))?;

        let mut accounts = self.storage.accounts.load();
        let account = accounts
            .iter_mut()
            .find(|a| a.tax_id == tax_id)
            .ok_or_else(|| NfeError::account_not_found(tax_id))?;

        let before = account.clone();
        account.apply(update);
        let after = account.clone();

        self.storage.accounts.save(&accounts)?;

        tracing::debug!(tax_id = %tax_id, "account updated");
        self.storage.record(AuditEntry::account_updated(&before, &after));

        Ok(after)
    }

    /// The account's own operation nature, or the process-wide fallback
    pub fn default_operation_nature(&self, account: &Account) -> String {
        account.operation_nature_or(&self.fallback_nature).to_string()
    }
}
