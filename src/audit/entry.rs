//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Account, Invoice};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Account,
    Invoice,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Tax ID for accounts, 1-based position in the history for invoices
    pub entity_id: String,

    /// The account reference ("username - tax_id") involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// A new account was registered. The password is masked.
    pub fn account_created(account: &Account) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type: EntityType::Account,
            entity_id: account.tax_id.clone(),
            entity_name: Some(account.reference()),
            before: None,
            after: serde_json::to_value(account.redacted()).ok(),
            diff_summary: None,
        }
    }

    /// An account's mutable fields were replaced. A password change shows
    /// up in the diff as `senha: changed`, never with its value.
    pub fn account_updated(before: &Account, after: &Account) -> Self {
        let before_json = serde_json::to_value(before.redacted()).ok();
        let after_json = serde_json::to_value(after.redacted()).ok();

        let mut diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };
        if before.password != after.password {
            let note = "senha: changed".to_string();
            diff_summary = Some(match diff_summary {
                Some(diff) => format!("{}, {}", diff, note),
                None => note,
            });
        }

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type: EntityType::Account,
            entity_id: after.tax_id.clone(),
            entity_name: Some(after.reference()),
            before: before_json,
            after: after_json,
            diff_summary,
        }
    }

    /// An invoice was appended at `position` (1-based) in the history
    pub fn invoice_issued(position: usize, invoice: &Invoice) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type: EntityType::Invoice,
            entity_id: position.to_string(),
            entity_name: Some(invoice.account_reference.clone()),
            before: None,
            after: serde_json::to_value(invoice).ok(),
            diff_summary: None,
        }
    }

    /// One line per entry, plus the changes of an account update
    pub fn format_human_readable(&self) -> String {
        let when = self.timestamp.format("%Y-%m-%d %H:%M:%S UTC");
        let reference = self.entity_name.as_deref().unwrap_or("?");

        let mut output = match self.entity_type {
            EntityType::Account => format!(
                "[{}] {} Account {} ({})",
                when, self.operation, self.entity_id, reference
            ),
            EntityType::Invoice => format!(
                "[{}] ISSUED Invoice #{} for {}",
                when, self.entity_id, reference
            ),
        };

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
