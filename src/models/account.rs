//! Account model
//!
//! A registered client profile, keyed by its tax ID (CNPJ). Field names in
//! the XML store are the Portuguese ones the desktop tool has always written.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback operation nature for accounts that carry none of their own
pub const DEFAULT_OPERATION_NATURE: &str = "170201";

/// A client account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "usuario", default)]
    pub username: String,

    /// Unique key; never changes after creation
    #[serde(rename = "cnpj", default)]
    pub tax_id: String,

    /// Stored in clear text
    #[serde(rename = "senha", default)]
    pub password: String,

    #[serde(rename = "cidade", default)]
    pub city: String,

    #[serde(
        rename = "natureza_padrao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_operation_nature: Option<String>,
}

impl Account {
    /// Create a new account without a default operation nature
    pub fn new(
        username: impl Into<String>,
        tax_id: impl Into<String>,
        password: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            tax_id: tax_id.into(),
            password: password.into(),
            city: city.into(),
            default_operation_nature: None,
        }
    }

    /// Set the account's own default operation nature
    pub fn with_operation_nature(mut self, nature: impl Into<String>) -> Self {
        self.default_operation_nature = Some(nature.into());
        self
    }

    /// The "username - tax_id" text invoices keep as their account snapshot
    pub fn reference(&self) -> String {
        format!("{} - {}", self.username, self.tax_id)
    }

    /// The account's own operation nature, or `fallback` when it has none
    pub fn operation_nature_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.default_operation_nature.as_deref().unwrap_or(fallback)
    }

    /// Apply an update to every field except the tax ID
    pub fn apply(&mut self, update: AccountUpdate) {
        self.username = update.username;
        self.password = update.password;
        self.city = update.city;
        self.default_operation_nature = update.default_operation_nature;
    }

    /// Trim surrounding whitespace from every field.
    ///
    /// The XML reader drops it, so the stored record and the in-memory one
    /// only agree once it is gone.
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            tax_id: self.tax_id.trim().to_string(),
            password: self.password.trim().to_string(),
            city: self.city.trim().to_string(),
            default_operation_nature: self
                .default_operation_nature
                .map(|n| n.trim().to_string()),
        }
    }

    /// Copy safe to write to the audit log
    pub fn redacted(&self) -> Self {
        Self {
            password: "********".to_string(),
            ..self.clone()
        }
    }

    /// Validate that no required field is empty
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        require("username", &self.username)?;
        require("tax_id", &self.tax_id)?;
        require("password", &self.password)?;
        require("city", &self.city)?;
        if let Some(nature) = &self.default_operation_nature {
            require("default_operation_nature", nature)?;
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference())
    }
}

/// Replacement values for the mutable fields of an account.
///
/// There is no tax ID here: the key cannot be changed through an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUpdate {
    pub username: String,
    pub password: String,
    pub city: String,
    pub default_operation_nature: Option<String>,
}

impl AccountUpdate {
    /// Start from the account's current values
    pub fn from_account(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            password: account.password.clone(),
            city: account.city.clone(),
            default_operation_nature: account.default_operation_nature.clone(),
        }
    }

    /// Trim surrounding whitespace from every field
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
            city: self.city.trim().to_string(),
            default_operation_nature: self
                .default_operation_nature
                .map(|n| n.trim().to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), AccountValidationError> {
        require("username", &self.username)?;
        require("password", &self.password)?;
        require("city", &self.city)?;
        if let Some(nature) = &self.default_operation_nature {
            require("default_operation_nature", nature)?;
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), AccountValidationError> {
    if value.trim().is_empty() {
        Err(AccountValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyField(&'static str),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Account {} cannot be empty", field),
        }
    }
}

impl std::error::Error for AccountValidationError {}
