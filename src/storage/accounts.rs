//! Account repository for XML storage
//!
//! Reads and writes the whole account store (`log.xml`) on every call.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::NfeError;
use crate::models::Account;

use super::xml_io::{ensure_xml_file, read_xml, write_xml_atomic};

/// Root container of the account store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename = "banco_senhas")]
struct AccountData {
    #[serde(rename = "conta", default)]
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
}

impl AccountRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load every account in file order
    pub fn load(&self) -> Vec<Account> {
        let data: AccountData = read_xml(&self.path);
        data.accounts
    }

    /// Replace the store contents with `accounts`
    pub fn save(&self, accounts: &[Account]) -> Result<(), NfeError> {
        let data = AccountData {
            accounts: accounts.to_vec(),
        };
        write_xml_atomic(&self.path, &data)
    }

    /// Write an empty store if none exists yet
    pub fn ensure_exists(&self) -> Result<bool, NfeError> {
        ensure_xml_file::<AccountData, _>(&self.path)
    }
}
