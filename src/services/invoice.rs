//! Invoice service
//!
//! Issues (simulated) NF-e records into the append-only history. No
//! uniqueness or referential check is made against the account store.

use chrono::NaiveDate;

use crate::audit::AuditEntry;
use crate::error::{NfeError, NfeResult};
use crate::models::invoice::DATE_FORMAT;
use crate::models::{Account, Invoice, InvoiceDraft, DEFAULT_OPERATION_NATURE};
use crate::storage::Storage;

/// Service for the invoice history
pub struct InvoiceService<'a> {
    storage: &'a Storage,
    fallback_nature: String,
}

impl<'a> InvoiceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            fallback_nature: DEFAULT_OPERATION_NATURE.to_string(),
        }
    }

    /// Use `nature` when drafting for accounts without their own default
    pub fn with_fallback_nature(mut self, nature: impl Into<String>) -> Self {
        self.fallback_nature = nature.into();
        self
    }

    /// All issued invoices, oldest first
    pub fn list_invoices(&self) -> Vec<Invoice> {
        self.storage.invoices.load()
    }

    /// Validate the draft and append it to the history as `ISSUED`
    pub fn append_invoice(&self, draft: InvoiceDraft) -> NfeResult<Invoice> {
        let invoice = Invoice::issue(draft).map_err(|e| NfeError::Validation(e.to_string()))?;

        let position = self.storage.invoices.append(invoice.clone())?;

        tracing::debug!(position, reference = %invoice.account_reference, "invoice issued");
        self.storage.record(AuditEntry::invoice_issued(position, &invoice));

        Ok(invoice)
    }

    /// Pre-fill a draft for `account`: the account reference is snapshotted
    /// and the operation nature comes from the account, or the fallback.
    pub fn draft_for_account(&self, account: &Account, issue_date: NaiveDate) -> InvoiceDraft {
        InvoiceDraft {
            issue_date: issue_date.format(DATE_FORMAT).to_string(),
            account_reference: account.reference(),
            operation_nature: account.operation_nature_or(&self.fallback_nature).to_string(),
            ..InvoiceDraft::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NfePaths;
    use crate::models::InvoiceStatus;
    use crate::services::AccountService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NfePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn draft(amount: &str) -> InvoiceDraft {
        InvoiceDraft {
            issue_date: "01/01/2024".into(),
            account_reference: "ana - 111".into(),
            amount: amount.into(),
            operation_nature: "170201".into(),
            service_description: "consulting".into(),
            notes: None,
        }
    }

    #[test]
    fn test_append_into_empty_history() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvoiceService::new(&storage);

        service.append_invoice(draft("100.00")).unwrap();

        let invoices = service.list_invoices();
        assert_eq!(invoices.len(), 1);
        let invoice = &invoices[0];
        assert_eq!(invoice.display_date(), "01/01/2024");
        assert_eq!(invoice.account_reference, "ana - 111");
        assert_eq!(invoice.amount, "100.00");
        assert_eq!(invoice.operation_nature, "170201");
        assert_eq!(invoice.service_description, "consulting");
        assert_eq!(invoice.status, InvoiceStatus::Issued);
    }

    #[test]
    fn test_append_is_strictly_additive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvoiceService::new(&storage);

        for i in 0..4 {
            let before = service.list_invoices();
            service.append_invoice(draft(&format!("{}.00", i))).unwrap();
            let after = service.list_invoices();

            assert_eq!(after.len(), before.len() + 1);
            assert_eq!(&after[..before.len()], &before[..]);
        }
    }

    #[test]
    fn test_invalid_draft_leaves_history_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvoiceService::new(&storage);
        service.append_invoice(draft("1.00")).unwrap();

        let mut bad = draft("2.00");
        bad.operation_nature = String::new();

        assert!(service.append_invoice(bad).unwrap_err().is_validation());
        assert_eq!(service.list_invoices().len(), 1);
    }

    #[test]
    fn test_no_referential_check_against_accounts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvoiceService::new(&storage);

        let mut d = draft("5.00");
        d.account_reference = "nobody - 000".into();
        assert!(service.append_invoice(d).is_ok());
    }

    #[test]
    fn test_reference_is_a_snapshot() {
        let (_temp_dir, storage) = create_test_storage();
        let accounts = AccountService::new(&storage);
        let invoices = InvoiceService::new(&storage);

        let account = accounts
            .create_account(Account::new("ana", "111", "p", "SP"))
            .unwrap();
        let mut d = invoices.draft_for_account(&account, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        d.amount = "10".into();
        d.service_description = "suporte".into();
        invoices.append_invoice(d).unwrap();

        let mut update = crate::models::AccountUpdate::from_account(&account);
        update.username = "ana renomeada".into();
        accounts.update_account("111", update).unwrap();

        assert_eq!(invoices.list_invoices()[0].account_reference, "ana - 111");
    }

    #[test]
    fn test_draft_for_account_uses_account_nature() {
        let (_temp_dir, storage) = create_test_storage();
        let service = InvoiceService::new(&storage).with_fallback_nature("5102");
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let own = Account::new("ana", "111", "p", "SP").with_operation_nature("5933");
        let d = service.draft_for_account(&own, date);
        assert_eq!(d.issue_date, "31/12/2024");
        assert_eq!(d.account_reference, "ana - 111");
        assert_eq!(d.operation_nature, "5933");

        let none = Account::new("bia", "222", "q", "RJ");
        assert_eq!(service.draft_for_account(&none, date).operation_nature, "5102");
    }

    #[test]
    fn test_unreadable_history_treated_as_empty() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.paths().invoices_file(), "<historico_nfe><nfe>").unwrap();

        let service = InvoiceService::new(&storage);
        assert!(service.list_invoices().is_empty());

        service.append_invoice(draft("1.00")).unwrap();
        assert_eq!(service.list_invoices().len(), 1);
    }

    #[test]
    fn test_append_keeps_records_with_legacy_dates() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(
            storage.paths().invoices_file(),
            "<historico_nfe><nfe><data>2024-02-01</data><conta>ana - 111</conta>\
             <valor>50</valor><natop>170201</natop><descricao>suporte</descricao>\
             <observacoes /><status>EMITIDA</status></nfe></historico_nfe>",
        )
        .unwrap();

        let service = InvoiceService::new(&storage);
        service.append_invoice(draft("1.00")).unwrap();

        let invoices = service.list_invoices();
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].issue_date, "2024-02-01");
        assert_eq!(invoices[1].amount, "1.00");

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries[0].entity_id, "2");
    }
}
