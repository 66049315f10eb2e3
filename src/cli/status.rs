use crate::error::Result;
use crate::fmt::format_bytes;
use crate::registry::Registry;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join("ledgerpad.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `ledgerpad init` to set up.");
        return Ok(());
    }

    let size = std::fs::metadata(&db_path)?.len();
    println!("DB size:    {}", format_bytes(size));

    let registry = Registry::open(&db_path)?;
    match registry.current_user() {
        None => {
            println!("User:       (not logged in)");
        }
        Some(user) => {
            println!("User:       {user}");
            let companies = registry.companies(&user);
            println!("Companies:  {}", companies.len());

            match registry.selected_company(&user) {
                None => println!("Selected:   (none)"),
                Some(company) => {
                    println!("Selected:   {} ({})", company.name, company.id);
                    println!();
                    for year in registry.years(&company.id) {
                        let count = registry.entries(&company.id, &year).len();
                        println!("  {year}:  {count} bookings");
                    }
                }
            }
        }
    }
    Ok(())
}
