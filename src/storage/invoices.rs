//! Invoice history repository for XML storage
//!
//! The history file (`historico_nfe.xml`) is append-only: this repository
//! exposes no way to change or remove a record once written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::NfeError;
use crate::models::Invoice;

use super::xml_io::{ensure_xml_file, read_xml, write_xml_atomic};

/// Root container of the history store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename = "historico_nfe")]
struct InvoiceData {
    #[serde(rename = "nfe", default)]
    invoices: Vec<Invoice>,
}

/// Repository for the invoice history log
pub struct InvoiceRepository {
    path: PathBuf,
}

impl InvoiceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load every invoice in issuance order
    pub fn load(&self) -> Vec<Invoice> {
        let data: InvoiceData = read_xml(&self.path);
        data.invoices
    }

    /// Append one invoice and rewrite the history file.
    ///
    /// Returns the number of records now in the log.
    pub fn append(&self, invoice: Invoice) -> Result<usize, NfeError> {
        let mut data: InvoiceData = read_xml(&self.path);
        data.invoices.push(invoice);
        write_xml_atomic(&self.path, &data)?;
        Ok(data.invoices.len())
    }

    /// Write an empty history if none exists yet
    pub fn ensure_exists(&self) -> Result<bool, NfeError> {
        ensure_xml_file::<InvoiceData, _>(&self.path)
    }
}
