//! Invoice (NF-e) model
//!
//! Records of simulated NF-e issuance. Once written an invoice is never
//! modified; the history store only grows.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display and storage format of issue dates (day/month/year)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Issuance status. Every record this tool produces is `Issued`; any other
/// text found in the history is kept as it was written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InvoiceStatus {
    #[default]
    Issued,
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Issued => "ISSUED",
            Self::Other(s) => s,
        }
    }

    /// Parse a stored status. Unknown text is preserved, never rejected.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "ISSUED" => Self::Issued,
            other => Self::Other(other.to_string()),
        }
    }

    /// `EMITIDA` is what older history files contain for issued records
    pub fn is_issued(&self) -> bool {
        match self {
            Self::Issued => true,
            Self::Other(s) => s == "EMITIDA",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for InvoiceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InvoiceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// A logged invoice issuance
///
/// Children are declared in the order they are written to the history file.
/// Stored records are read as text: a record this tool would reject today
/// still loads, and is written back unchanged on the next append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// dd/mm/yyyy for records issued here; older records may differ
    #[serde(rename = "data", default)]
    pub issue_date: String,

    /// "username - tax_id" snapshot taken at issuance, never re-resolved
    #[serde(rename = "conta", default)]
    pub account_reference: String,

    /// Decimal text as typed; not validated numerically
    #[serde(rename = "valor", default)]
    pub amount: String,

    #[serde(rename = "natop", default)]
    pub operation_nature: String,

    #[serde(rename = "descricao", default)]
    pub service_description: String,

    #[serde(rename = "observacoes", default)]
    pub notes: String,

    #[serde(default)]
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Turn a validated draft into an issued invoice.
    ///
    /// Fields are trimmed and the date is rewritten in canonical
    /// dd/mm/yyyy form.
    pub fn issue(draft: InvoiceDraft) -> Result<Self, InvoiceValidationError> {
        draft.validate()?;

        let issue_date = parse_date(&draft.issue_date)?;

        Ok(Self {
            issue_date: issue_date.format(DATE_FORMAT).to_string(),
            account_reference: draft.account_reference.trim().to_string(),
            amount: draft.amount.trim().to_string(),
            operation_nature: draft.operation_nature.trim().to_string(),
            service_description: draft.service_description.trim().to_string(),
            notes: draft.notes.map(|n| n.trim().to_string()).unwrap_or_default(),
            status: InvoiceStatus::Issued,
        })
    }

    /// Issue date as shown to the user
    pub fn display_date(&self) -> &str {
        &self.issue_date
    }

    /// The issue date, if it is in dd/mm/yyyy form
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.issue_date).ok()
    }
}

/// Input fields for a new invoice, as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceDraft {
    /// Day/month/year text, e.g. "01/01/2024"
    pub issue_date: String,
    pub account_reference: String,
    pub amount: String,
    pub operation_nature: String,
    pub service_description: String,
    pub notes: Option<String>,
}

impl InvoiceDraft {
    /// Check every required field is present; notes may be empty
    pub fn validate(&self) -> Result<(), InvoiceValidationError> {
        let required = [
            ("date", &self.issue_date),
            ("account_reference", &self.account_reference),
            ("amount", &self.amount),
            ("operation_nature", &self.operation_nature),
            ("service_description", &self.service_description),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(InvoiceValidationError::EmptyField(field));
            }
        }

        Ok(())
    }
}

/// Parse a day/month/year date
pub fn parse_date(s: &str) -> Result<NaiveDate, InvoiceValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| InvoiceValidationError::InvalidDate(s.to_string()))
}

/// Validation errors for invoices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceValidationError {
    EmptyField(&'static str),
    InvalidDate(String),
}

impl fmt::Display for InvoiceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Invoice {} cannot be empty", field),
            Self::InvalidDate(date) => {
                write!(f, "Invalid issue date '{}', expected dd/mm/yyyy", date)
            }
        }
    }
}

impl std::error::Error for InvoiceValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> InvoiceDraft {
        InvoiceDraft {
            issue_date: "01/01/2024".into(),
            account_reference: "ana - 111".into(),
            amount: "100.00".into(),
            operation_nature: "170201".into(),
            service_description: "consulting".into(),
            notes: None,
        }
    }

    #[test]
    fn test_issue_from_draft() {
        let invoice = Invoice::issue(draft()).unwrap();

        assert_eq!(invoice.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(invoice.display_date(), "01/01/2024");
        assert_eq!(invoice.account_reference, "ana - 111");
        assert_eq!(invoice.amount, "100.00");
        assert_eq!(invoice.notes, "");
        assert_eq!(invoice.status, InvoiceStatus::Issued);
    }

    #[test]
    fn test_notes_are_optional_and_multiline() {
        let mut d = draft();
        d.notes = Some("line one\nline two\n".into());

        let invoice = Invoice::issue(d).unwrap();
        assert_eq!(invoice.notes, "line one\nline two");
    }

    #[test]
    fn test_empty_required_field() {
        let mut d = draft();
        d.service_description = " ".into();

        assert_eq!(
            Invoice::issue(d),
            Err(InvoiceValidationError::EmptyField("service_description"))
        );
    }

    #[test]
    fn test_invalid_date() {
        let mut d = draft();
        d.issue_date = "2024-01-01".into();

        assert!(matches!(
            Invoice::issue(d),
            Err(InvoiceValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_amount_is_not_validated_numerically() {
        let mut d = draft();
        d.amount = "R$ 1.234,56".into();

        assert_eq!(Invoice::issue(d).unwrap().amount, "R$ 1.234,56");
    }

    #[test]
    fn test_issue_trims_and_normalizes_date() {
        let mut d = draft();
        d.issue_date = " 1/2/2024 ".into();
        d.account_reference = " ana - 111 ".into();
        d.amount = "100.00\n".into();

        let invoice = Invoice::issue(d).unwrap();
        assert_eq!(invoice.issue_date, "01/02/2024");
        assert_eq!(invoice.account_reference, "ana - 111");
        assert_eq!(invoice.amount, "100.00");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(InvoiceStatus::parse("ISSUED"), InvoiceStatus::Issued);
        assert!(InvoiceStatus::parse("EMITIDA").is_issued());
        assert_eq!(InvoiceStatus::parse("EMITIDA").to_string(), "EMITIDA");

        let cancelled = InvoiceStatus::parse("CANCELLED");
        assert!(!cancelled.is_issued());
        assert_eq!(cancelled.as_str(), "CANCELLED");
        assert_eq!(InvoiceStatus::Issued.to_string(), "ISSUED");
    }

    #[test]
    fn test_legacy_date_kept_as_text() {
        let invoice = Invoice {
            issue_date: "2024-02-01".into(),
            ..Invoice::issue(draft()).unwrap()
        };

        assert_eq!(invoice.display_date(), "2024-02-01");
        assert_eq!(invoice.parsed_date(), None);
    }
}
