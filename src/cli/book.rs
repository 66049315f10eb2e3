use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::chart::account_label;
use crate::error::{LedgerpadError, Result};
use crate::fmt::chf;
use crate::models::{JournalEntry, SplitLine};
use crate::registry::Registry;
use crate::settings::db_path;

pub fn simple(debit: &str, credit: &str, amount: f64, text: &str, year: Option<String>) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;
    let year = super::resolve_year(&registry, &company.id, year)?;

    let debit = debit.trim();
    let credit = credit.trim();
    if debit.is_empty() || credit.is_empty() {
        return Err(LedgerpadError::InvalidInput(
            "both a debit and a credit account are required".to_string(),
        ));
    }
    if !(amount > 0.0) {
        return Err(LedgerpadError::InvalidInput("amount must be positive".to_string()));
    }

    registry.add_entry(&company.id, &year, JournalEntry::simple(debit, credit, amount, text))?;
    println!(
        "Booked in {year}: {} an {}, {}",
        account_label(debit),
        account_label(credit),
        chf(amount)
    );
    Ok(())
}

pub fn split(debits: &[String], credits: &[String], text: &str, year: Option<String>) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;
    let year = super::resolve_year(&registry, &company.id, year)?;

    let debits = parse_lines(debits)?;
    let credits = parse_lines(credits)?;

    // Balance is enforced here at entry time; the aggregator never checks it.
    let debit_total: f64 = debits.iter().map(|l| l.amount).sum();
    let credit_total: f64 = credits.iter().map(|l| l.amount).sum();
    if !(debit_total > 0.0) || (debit_total - credit_total).abs() >= 0.005 {
        return Err(LedgerpadError::InvalidInput(format!(
            "debit and credit sides must balance (Soll {}, Haben {})",
            chf(debit_total),
            chf(credit_total)
        )));
    }

    registry.add_entry(&company.id, &year, JournalEntry::split(debits, credits, text))?;
    println!("Booked split entry in {year}: {} per side", chf(debit_total));
    Ok(())
}

pub fn list(year: Option<String>) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;
    let year = super::resolve_year(&registry, &company.id, year)?;

    let entries = registry.entries(&company.id, &year);
    if entries.is_empty() {
        println!("No bookings in {year} yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Text", "Soll", "Haben", "Amount"]);
    for entry in &entries {
        let date = entry.date();
        let day = date.get(..10).unwrap_or(date);
        match entry {
            JournalEntry::Simple { debit, credit, amount, text, .. } => {
                table.add_row(vec![
                    Cell::new(day),
                    Cell::new(text),
                    Cell::new(account_label(debit)),
                    Cell::new(account_label(credit)),
                    Cell::new(chf(*amount)),
                ]);
            }
            JournalEntry::Split { debits, credits, text, .. } => {
                let soll = join_lines(debits);
                let haben = join_lines(credits);
                let total: f64 = debits.iter().map(|l| l.amount).sum();
                table.add_row(vec![
                    Cell::new(day),
                    Cell::new(text),
                    Cell::new(soll),
                    Cell::new(haben),
                    Cell::new(chf(total)),
                ]);
            }
        }
    }
    println!(
        "Journal {year} — '{}' ({} bookings)\n{table}",
        company.name.bold(),
        entries.len()
    );
    Ok(())
}

/// Parse a split line written as NO:AMOUNT, e.g. 1530:60000.
fn parse_lines(raw: &[String]) -> Result<Vec<SplitLine>> {
    raw.iter()
        .map(|line| {
            let (no, amount) = line.split_once(':').ok_or_else(|| {
                LedgerpadError::InvalidInput(format!("invalid line '{line}' (expected NO:AMOUNT)"))
            })?;
            let amount: f64 = amount.trim().parse().map_err(|_| {
                LedgerpadError::InvalidInput(format!("invalid amount in line '{line}'"))
            })?;
            if no.trim().is_empty() || !(amount > 0.0) {
                return Err(LedgerpadError::InvalidInput(format!(
                    "line '{line}' needs an account and a positive amount"
                )));
            }
            Ok(SplitLine { account_no: no.trim().to_string(), amount })
        })
        .collect()
}

fn join_lines(lines: &[SplitLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{} ({})", account_label(&l.account_no), chf(l.amount)))
        .collect::<Vec<_>>()
        .join(", ")
}
