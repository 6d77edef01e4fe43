//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{NfeError, NfeResult};
use crate::models::{Account, AccountUpdate};
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Register a new account
    Create {
        /// Username
        username: String,
        /// Tax ID (CNPJ), unique per account
        tax_id: String,
        /// City
        city: String,
        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Default operation nature for this account
        #[arg(short, long)]
        nature: Option<String>,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Tax ID of the account
        tax_id: String,
    },
    /// Edit an account (the tax ID cannot change)
    Edit {
        /// Tax ID of the account
        tax_id: String,
        /// New username
        #[arg(short, long)]
        username: Option<String>,
        /// New password
        #[arg(short, long)]
        password: Option<String>,
        /// New city
        #[arg(short, long)]
        city: Option<String>,
        /// New default operation nature
        #[arg(short, long)]
        nature: Option<String>,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> NfeResult<()> {
    let service =
        AccountService::new(storage).with_fallback_nature(&settings.default_operation_nature);

    match cmd {
        AccountCommands::Create {
            username,
            tax_id,
            city,
            password,
            nature,
        } => {
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };

            let mut account = Account::new(username, tax_id, password, city);
            account.default_operation_nature = nature;

            let account = service.create_account(account)?;

            println!("Created account: {}", account.reference());
            println!("  City: {}", account.city);
            println!(
                "  Operation Nature: {}",
                service.default_operation_nature(&account)
            );
        }

        AccountCommands::List => {
            let accounts = service.list_accounts();
            print!(
                "{}",
                format_account_list(&accounts, &settings.default_operation_nature)
            );
        }

        AccountCommands::Show { tax_id } => {
            let account = service
                .find_by_tax_id(&tax_id)
                .ok_or_else(|| NfeError::account_not_found(&tax_id))?;

            print!(
                "{}",
                format_account_details(&account, &settings.default_operation_nature)
            );
        }

        AccountCommands::Edit {
            tax_id,
            username,
            password,
            city,
            nature,
        } => {
            let account = service
                .find_by_tax_id(&tax_id)
                .ok_or_else(|| NfeError::account_not_found(&tax_id))?;

            if username.is_none() && password.is_none() && city.is_none() && nature.is_none() {
                println!("No changes specified. Use --username, --password, --city or --nature.");
                return Ok(());
            }

            let mut update = AccountUpdate::from_account(&account);
            if let Some(username) = username {
                update.username = username;
            }
            if let Some(password) = password {
                update.password = password;
            }
            if let Some(city) = city {
                update.city = city;
            }
            if nature.is_some() {
                update.default_operation_nature = nature;
            }

            let updated = service.update_account(&tax_id, update)?;
            println!("Updated account: {}", updated.reference());
        }
    }

    Ok(())
}
