use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};
use crate::store::Store;

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }

    let dir = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&dir)?;
    save_settings(&settings)?;

    let db_path = dir.join("ledgerpad.db");
    Store::open(&db_path)?;

    println!("Data directory: {}", dir.display());
    println!("Database:       {}", db_path.display());
    println!("Ready. Log in with `ledgerpad login <username>`.");
    Ok(())
}
