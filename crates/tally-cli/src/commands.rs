//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};

use tally_core::db::Database;

pub fn open_db(path: &Path) -> Result<Database> {
    Database::new(&path.to_string_lossy())
        .with_context(|| format!("Failed to open database at {}", path.display()))
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;
    println!("Initialized database at {}", db.path());
    Ok(())
}

pub fn cmd_import(db_path: &Path, file: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    let data = std::fs::read(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let transactions = tally_core::import::parse_csv(data.as_slice())
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let imported = db.bulk_insert_transactions(&transactions)?;
    println!("Imported {} transactions", imported);
    Ok(())
}

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16) -> Result<()> {
    println!("Starting Tally web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);

    let db = open_db(db_path)?;
    tally_server::serve(db, host, port).await
}
