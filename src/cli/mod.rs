pub mod backup;
pub mod book;
pub mod company;
pub mod demo;
pub mod init;
pub mod login;
pub mod practice;
pub mod report;
pub mod status;
pub mod year;

use clap::{Parser, Subcommand};

use crate::error::{LedgerpadError, Result};
use crate::registry::Registry;

/// Default to the company's first fiscal year, like the year tabs did.
pub(crate) fn resolve_year(registry: &Registry, company_id: &str, year: Option<String>) -> Result<String> {
    let years = registry.years(company_id);
    match year {
        Some(y) => {
            let y = y.trim().to_string();
            if years.iter().any(|known| known == &y) {
                Ok(y)
            } else {
                Err(LedgerpadError::InvalidInput(format!(
                    "year {y} does not exist (available: {})",
                    years.join(", ")
                )))
            }
        }
        None => years
            .first()
            .cloned()
            .ok_or_else(|| LedgerpadError::Other("company has no fiscal years".to_string())),
    }
}

#[derive(Parser)]
#[command(name = "ledgerpad", about = "Double-entry bookkeeping practice CLI for commerce classes.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up ledgerpad: choose a data directory and initialize the database.
    Init {
        /// Path for ledgerpad data (default: ~/Documents/ledgerpad)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Log in with one of the fixed classroom accounts.
    Login {
        /// Username, e.g. erblin.tolaj
        username: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Log out and clear the selected company.
    Logout,
    /// Manage practice companies.
    Company {
        #[command(subcommand)]
        command: CompanyCommands,
    },
    /// Manage fiscal years of the selected company.
    Year {
        #[command(subcommand)]
        command: YearCommands,
    },
    /// Record and list journal entries.
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
    /// Practice with generated booking exercises.
    Practice {
        #[command(subcommand)]
        command: PracticeCommands,
    },
    /// Generate statements from the journal.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Load a sample company with bookings to explore ledgerpad.
    Demo,
    /// Show current database, session and summary statistics.
    Status,
    /// Back up the database.
    Backup {
        /// Output path (default: <data_dir>/backups/ledgerpad-YYYYMMDD-HHMMSS.db)
        #[arg(long)]
        output: Option<String>,
    },
    /// Generate shell completions.
    Completions {
        /// Shell to generate for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum CompanyCommands {
    /// Create a new practice company and select it.
    Add {
        /// Company name
        name: String,
        /// Legal form, e.g. AG, GmbH, Einzelunternehmen
        #[arg(long, default_value = "AG")]
        legal: String,
        /// Share capital in CHF
        #[arg(long, default_value = "0")]
        capital: f64,
        /// Industry
        #[arg(long, default_value = "")]
        industry: String,
        /// Company purpose
        #[arg(long, default_value = "")]
        purpose: String,
        /// Number of employees
        #[arg(long, default_value = "0")]
        size: u32,
    },
    /// List this user's companies.
    List,
    /// Select the company to work on.
    Select {
        /// Company id (shown in `ledgerpad company list`)
        id: String,
    },
    /// Delete a company including its years and journals.
    Remove {
        /// Company id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum YearCommands {
    /// List fiscal years.
    List,
    /// Add a fiscal year (four digits, 2000-2100).
    Add {
        /// Year, e.g. 2027
        year: String,
    },
    /// Remove a fiscal year and all its bookings.
    Remove {
        /// Year to remove
        year: String,
    },
}

#[derive(Subcommand)]
pub enum BookCommands {
    /// Record a simple booking: one debit account against one credit account.
    Simple {
        /// Debit (Soll) account number
        #[arg(long)]
        debit: String,
        /// Credit (Haben) account number
        #[arg(long)]
        credit: String,
        /// Amount in CHF (must be positive)
        #[arg(long)]
        amount: f64,
        /// Booking text
        #[arg(long, default_value = "")]
        text: String,
        /// Fiscal year (default: first year of the company)
        #[arg(long)]
        year: Option<String>,
    },
    /// Record a split booking with several lines per side.
    Split {
        /// Debit line as NO:AMOUNT, repeatable
        #[arg(long = "debit", required = true)]
        debits: Vec<String>,
        /// Credit line as NO:AMOUNT, repeatable
        #[arg(long = "credit", required = true)]
        credits: Vec<String>,
        /// Booking text
        #[arg(long, default_value = "")]
        text: String,
        /// Fiscal year (default: first year of the company)
        #[arg(long)]
        year: Option<String>,
    },
    /// List the journal of a fiscal year.
    List {
        /// Fiscal year (default: first year of the company)
        #[arg(long)]
        year: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PracticeCommands {
    /// Generate a fresh set of 50 exercises, replacing any existing ones.
    Generate {
        /// Fiscal year (default: first year of the company)
        #[arg(long)]
        year: Option<String>,
    },
    /// List the exercises of a year with their status.
    List {
        /// Fiscal year (default: first year of the company)
        #[arg(long)]
        year: Option<String>,
    },
    /// Solve an exercise: book it as a simple entry and mark it done.
    Solve {
        /// Exercise number from `ledgerpad practice list`
        number: usize,
        /// Debit (Soll) account number
        #[arg(long)]
        debit: String,
        /// Credit (Haben) account number
        #[arg(long)]
        credit: String,
        /// Amount in CHF (must be positive)
        #[arg(long)]
        amount: f64,
        /// Fiscal year (default: first year of the company)
        #[arg(long)]
        year: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Balance sheet (Bilanz): assets against liabilities and equity.
    Balance {
        /// Fiscal year (default: first year of the company)
        #[arg(long)]
        year: Option<String>,
    },
    /// Income statement (Erfolgsrechnung): expenses against revenue.
    Income {
        /// Fiscal year (default: first year of the company)
        #[arg(long)]
        year: Option<String>,
    },
}
