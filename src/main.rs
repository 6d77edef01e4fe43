use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nfe_cli::cli::{handle_account_command, handle_invoice_command};
use nfe_cli::config::{NfePaths, Settings, Theme};
use nfe_cli::error::NfeError;
use nfe_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "nfe",
    version,
    about = "Client account registry and simulated NF-e issuance log",
    long_about = "Keeps client accounts (keyed by CNPJ) and a history of simulated \
                  NF-e issuances in two XML files on local disk."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(nfe_cli::cli::AccountCommands),

    /// Invoice issuance and history
    #[command(subcommand, alias = "inv")]
    Invoice(nfe_cli::cli::InvoiceCommands),

    /// Create the store files and settings
    Init,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show paths and settings, optionally changing the theme
    Config {
        /// Theme (clam, alt, default, classic)
        #[arg(long)]
        theme: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = NfePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Invoice(cmd)) => {
            handle_invoice_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing nfe-cli at: {}", paths.base_dir().display());
            storage.initialize()?;
            settings.save(&paths)?;
            println!("Account store:   {}", paths.accounts_file().display());
            println!("Invoice history: {}", paths.invoices_file().display());
        }
        Some(Commands::Audit { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("Audit log is empty.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config { theme }) => {
            if let Some(theme) = theme {
                settings.theme = Theme::parse(&theme).ok_or_else(|| {
                    NfeError::Validation(format!(
                        "Invalid theme: '{}'. Valid themes: clam, alt, default, classic",
                        theme
                    ))
                })?;
                settings.save(&paths)?;
            }

            println!("nfe-cli Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Account store:   {}", paths.accounts_file().display());
            println!("Invoice history: {}", paths.invoices_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Theme: {}", settings.theme);
            println!(
                "  Default operation nature: {}",
                settings.default_operation_nature
            );
        }
        None => {
            println!("nfe-cli - client accounts and NF-e issuance history");
            println!();
            println!("Run 'nfe --help' for usage information.");
        }
    }

    Ok(())
}
