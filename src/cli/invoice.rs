//! Invoice CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::invoice::format_invoice_list;
use crate::error::{NfeError, NfeResult};
use crate::services::{AccountService, InvoiceService};
use crate::storage::Storage;

/// Invoice subcommands
#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Issue a (simulated) NF-e for an account
    Issue {
        /// Tax ID of the issuing account
        tax_id: String,
        /// Amount, as decimal text
        amount: String,
        /// Service description
        description: String,
        /// Issue date (dd/mm/yyyy), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Operation nature, defaults to the account's
        #[arg(short, long)]
        nature: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show the issuance history
    List,
}

/// Handle an invoice command
pub fn handle_invoice_command(
    storage: &Storage,
    settings: &Settings,
    cmd: InvoiceCommands,
) -> NfeResult<()> {
    let service =
        InvoiceService::new(storage).with_fallback_nature(&settings.default_operation_nature);

    match cmd {
        InvoiceCommands::Issue {
            tax_id,
            amount,
            description,
            date,
            nature,
            notes,
        } => {
            let account = AccountService::new(storage)
                .find_by_tax_id(&tax_id)
                .ok_or_else(|| NfeError::account_not_found(&tax_id))?;

            let mut draft = service.draft_for_account(&account, Local::now().date_naive());
            if let Some(date) = date {
                draft.issue_date = date;
            }
            if let Some(nature) = nature {
                draft.operation_nature = nature;
            }
            draft.amount = amount;
            draft.service_description = description;
            draft.notes = notes;

            let invoice = service.append_invoice(draft)?;

            println!("NF-e issued: {}", invoice.status);
            println!("  Date:    {}", invoice.display_date());
            println!("  Account: {}", invoice.account_reference);
            println!("  Amount:  {}", invoice.amount);
            println!("  Nature:  {}", invoice.operation_nature);
        }

        InvoiceCommands::List => {
            print!("{}", format_invoice_list(&service.list_invoices()));
        }
    }

    Ok(())
}
