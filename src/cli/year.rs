use crate::error::Result;
use crate::registry::Registry;
use crate::settings::db_path;

pub fn list() -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;

    println!("Fiscal years of '{}':", company.name);
    for year in registry.years(&company.id) {
        let count = registry.entries(&company.id, &year).len();
        println!("  {year}  ({count} bookings)");
    }
    Ok(())
}

pub fn add(year: &str) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;

    registry.add_year(&company.id, year)?;
    println!("Added year {} to '{}'", year.trim(), company.name);
    Ok(())
}

pub fn remove(year: &str) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;

    registry.remove_year(&company.id, year)?;
    println!("Removed year {year} and all its bookings.");
    Ok(())
}
