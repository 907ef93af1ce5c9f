use anyhow::Result;
use std::path::Path;

use sqlscout_db::Database;

/// Create and seed the demo retail database. Safe to re-run.
pub fn run(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    db.seed_demo_data()?;

    for table in db.usable_tables()? {
        let rows = db.run_query(&format!("SELECT COUNT(*) FROM \"{table}\""))?;
        let count = rows.rows.first().and_then(|r| r.first()).cloned().unwrap_or_default();
        println!("{table}: {count} rows");
    }
    println!("Database ready at {}", db_path.display());
    Ok(())
}
