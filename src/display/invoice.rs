//! Invoice history display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Invoice;

#[derive(Tabled)]
struct InvoiceRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Account")]
    account: &'a str,
    #[tabled(rename = "Amount")]
    amount: &'a str,
    #[tabled(rename = "Nature")]
    nature: &'a str,
    #[tabled(rename = "Description")]
    description: &'a str,
    #[tabled(rename = "Status")]
    status: &'a str,
}

/// Format the invoice history as a table, oldest first
pub fn format_invoice_list(invoices: &[Invoice]) -> String {
    if invoices.is_empty() {
        return "No invoices issued.\n".to_string();
    }

    let rows = invoices.iter().map(|inv| InvoiceRow {
        date: inv.display_date(),
        account: &inv.account_reference,
        amount: &inv.amount,
        nature: &inv.operation_nature,
        description: &inv.service_description,
        status: inv.status.as_str(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvoiceDraft;

    #[test]
    fn test_format_invoice_list() {
        let invoice = Invoice::issue(InvoiceDraft {
            issue_date: "01/01/2024".into(),
            account_reference: "ana - 111".into(),
            amount: "100.00".into(),
            operation_nature: "170201".into(),
            service_description: "consulting".into(),
            notes: None,
        })
        .unwrap();

        let output = format_invoice_list(&[invoice]);
        assert!(output.contains("01/01/2024"));
        assert!(output.contains("ana - 111"));
        assert!(output.contains("ISSUED"));
    }

    #[test]
    fn test_format_empty_history() {
        assert_eq!(format_invoice_list(&[]), "No invoices issued.\n");
    }
}
