use std::collections::BTreeMap;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::chart::account_label;
use crate::classify::LeadingDigit;
use crate::error::Result;
use crate::fmt::chf;
use crate::ledger::compute_balances;
use crate::registry::Registry;
use crate::settings::db_path;
use crate::statement::partition;

pub fn balance(year: Option<String>) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;
    let year = super::resolve_year(&registry, &company.id, year)?;

    let entries = registry.entries(&company.id, &year);
    let statement = partition(&compute_balances(&entries), &LeadingDigit::balance_sheet());

    println!("Bilanz {year} — '{}'", company.name.bold());
    print_side("Aktiven", &statement.left, statement.left_total);
    print_side("Passiven", &statement.right, statement.right_total);

    if statement.is_balanced() {
        println!("{}", "Balance sheet agrees: total assets = total liabilities.".green());
    } else {
        // Shown, not enforced: the imbalance is the teaching moment.
        println!(
            "{}",
            format!(
                "Warning: balance sheet does not agree ({} vs {}). Check your bookings — Soll/Haben swapped?",
                chf(statement.left_total),
                chf(statement.right_total)
            )
            .yellow()
        );
    }
    Ok(())
}

pub fn income(year: Option<String>) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;
    let year = super::resolve_year(&registry, &company.id, year)?;

    let entries = registry.entries(&company.id, &year);
    let statement = partition(&compute_balances(&entries), &LeadingDigit::income_statement());

    println!("Erfolgsrechnung {year} — '{}'", company.name.bold());
    print_side("Aufwand", &statement.left, statement.left_total);
    print_side("Ertrag", &statement.right, statement.right_total);

    let result = statement.surplus();
    let label = if result >= 0.0 {
        "Jahresgewinn".green().bold()
    } else {
        "Jahresverlust".red().bold()
    };
    println!("{label}: {}", chf(result));
    println!("Bookings considered: {}", entries.len());
    Ok(())
}

fn print_side(title: &str, column: &BTreeMap<String, f64>, total: f64) {
    let mut table = Table::new();
    table.set_header(vec![title, "Amount"]);
    for (account, value) in column {
        table.add_row(vec![Cell::new(account_label(account)), Cell::new(chf(*value))]);
    }
    table.add_row(vec![Cell::new(format!("Total {title}").bold()), Cell::new(chf(total))]);
    println!("{table}");
}
