use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::chf;
use crate::models::Company;
use crate::registry::Registry;
use crate::settings::db_path;

pub fn add(name: &str, legal: &str, capital: f64, industry: &str, purpose: &str, size: u32) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;

    let company = Company::new(name, legal, capital, industry, purpose, size);
    let id = company.id.clone();
    registry.add_company(&user, company)?;
    registry.select_company(&user, &id)?;

    println!("Created company '{name}' ({id}) and selected it.");
    Ok(())
}

pub fn list() -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let companies = registry.companies(&user);

    if companies.is_empty() {
        println!("No companies yet. Create one with `ledgerpad company add <name>`.");
        return Ok(());
    }

    let selected = registry.selected_company(&user).map(|c| c.id);
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Legal", "Capital", "Industry", "Size", ""]);
    for c in companies {
        let marker = if selected.as_deref() == Some(&c.id) { "selected" } else { "" };
        table.add_row(vec![
            Cell::new(&c.id),
            Cell::new(&c.name),
            Cell::new(&c.legal),
            Cell::new(chf(c.capital)),
            Cell::new(&c.industry),
            Cell::new(c.size),
            Cell::new(marker),
        ]);
    }
    println!("Companies\n{table}");
    Ok(())
}

pub fn select(id: &str) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.select_company(&user, id)?;
    println!("Selected company '{}'", company.name);
    Ok(())
}

pub fn remove(id: &str) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    registry.remove_company(&user, id)?;
    println!("Removed company {id} with all years and bookings.");
    Ok(())
}
