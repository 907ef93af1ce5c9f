use anyhow::Result;
use std::path::Path;

use sqlscout_db::Database;
use sqlscout_retrieval::build_schema_documents;

/// Print the tables the retriever would index.
pub fn run(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let documents = build_schema_documents(&db)?;

    if documents.is_empty() {
        println!("No tables found. Run `sqlscout init-db` first.");
        return Ok(());
    }
    for document in documents {
        println!("{}", document.table_name);
    }
    Ok(())
}
