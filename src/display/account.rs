//! Account display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Account;

#[derive(Tabled)]
struct AccountRow<'a> {
    #[tabled(rename = "Username")]
    username: &'a str,
    #[tabled(rename = "Tax ID")]
    tax_id: &'a str,
    #[tabled(rename = "City")]
    city: &'a str,
    #[tabled(rename = "Operation Nature")]
    nature: &'a str,
}

/// Format accounts as a table. `fallback` is shown for accounts without
/// their own operation nature.
pub fn format_account_list(accounts: &[Account], fallback: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let rows = accounts.iter().map(|a| AccountRow {
        username: &a.username,
        tax_id: &a.tax_id,
        city: &a.city,
        nature: a.operation_nature_or(fallback),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a single account's details; the password is masked
pub fn format_account_details(account: &Account, fallback: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.reference()));
    output.push_str(&format!("  Username:         {}\n", account.username));
    output.push_str(&format!("  Tax ID:           {}\n", account.tax_id));
    output.push_str(&format!("  Password:         {}\n", "*".repeat(8)));
    output.push_str(&format!("  City:             {}\n", account.city));

    match &account.default_operation_nature {
        Some(nature) => output.push_str(&format!("  Operation Nature: {}\n", nature)),
        None => output.push_str(&format!("  Operation Nature: {} (default)\n", fallback)),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_account_list() {
        let accounts = vec![
            Account::new("ana", "111", "p", "SP").with_operation_nature("5933"),
            Account::new("bia", "222", "q", "RJ"),
        ];

        let output = format_account_list(&accounts, "170201");
        assert!(output.contains("Tax ID"));
        assert!(output.contains("ana"));
        assert!(output.contains("5933"));
        assert!(output.contains("170201"));
        assert!(!output.contains("| p "));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_account_list(&[], "170201").contains("No accounts found"));
    }

    #[test]
    fn test_format_account_details_masks_password() {
        let account = Account::new("ana", "111", "hunter2", "SP");
        let output = format_account_details(&account, "170201");

        assert!(output.contains("ana - 111"));
        assert!(output.contains("170201 (default)"));
        assert!(!output.contains("hunter2"));
    }
}
