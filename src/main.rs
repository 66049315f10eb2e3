mod auth;
mod chart;
mod classify;
mod cli;
mod db;
mod error;
mod fmt;
mod ledger;
mod models;
mod registry;
mod settings;
mod statement;
mod store;

use clap::{CommandFactory, Parser};

use cli::{BookCommands, Cli, Commands, CompanyCommands, PracticeCommands, ReportCommands, YearCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Login { username, password } => cli::login::login(&username, password),
        Commands::Logout => cli::login::logout(),
        Commands::Company { command } => match command {
            CompanyCommands::Add { name, legal, capital, industry, purpose, size } => {
                cli::company::add(&name, &legal, capital, &industry, &purpose, size)
            }
            CompanyCommands::List => cli::company::list(),
            CompanyCommands::Select { id } => cli::company::select(&id),
            CompanyCommands::Remove { id } => cli::company::remove(&id),
        },
        Commands::Year { command } => match command {
            YearCommands::List => cli::year::list(),
            YearCommands::Add { year } => cli::year::add(&year),
            YearCommands::Remove { year } => cli::year::remove(&year),
        },
        Commands::Book { command } => match command {
            BookCommands::Simple { debit, credit, amount, text, year } => {
                cli::book::simple(&debit, &credit, amount, &text, year)
            }
            BookCommands::Split { debits, credits, text, year } => {
                cli::book::split(&debits, &credits, &text, year)
            }
            BookCommands::List { year } => cli::book::list(year),
        },
        Commands::Practice { command } => match command {
            PracticeCommands::Generate { year } => cli::practice::generate(year),
            PracticeCommands::List { year } => cli::practice::list(year),
            PracticeCommands::Solve { number, debit, credit, amount, year } => {
                cli::practice::solve(number, &debit, &credit, amount, year)
            }
        },
        Commands::Report { command } => match command {
            ReportCommands::Balance { year } => cli::report::balance(year),
            ReportCommands::Income { year } => cli::report::income(year),
        },
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
        Commands::Backup { output } => cli::backup::run(output),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "ledgerpad", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
