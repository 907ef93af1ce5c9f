pub mod ask;
pub mod chat;
pub mod init_db;
pub mod serve;
pub mod tables;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use sqlscout_core::{QueryOutcome, QuerySuccess};
use sqlscout_db::Database;
use sqlscout_embeddings::{EmbeddingProvider, EmbeddingService};
use sqlscout_llm::LlmClient;
use sqlscout_retrieval::{build_schema_documents, SchemaIndex};
use sqlscout_service::QueryService;

use crate::config;

/// Open and seed the database, load the embedding model, build the schema
/// index, and wire up the pipeline. Runs once at startup; the heavy model
/// and embedding work happens off the async runtime.
pub async fn build_service(db_path: &Path, top_k: usize) -> Result<Arc<QueryService>> {
    let db = Database::open(db_path)?;
    db.seed_demo_data()?;

    let embeddings = tokio::task::spawn_blocking(EmbeddingService::new).await??;
    let provider: Arc<dyn EmbeddingProvider> = Arc::new(embeddings);

    let documents = build_schema_documents(&db)?;
    tracing::info!(tables = documents.len(), "indexing schema documents");
    let index =
        tokio::task::spawn_blocking(move || SchemaIndex::build(provider, documents)).await??;

    let llm = LlmClient::new(config::get_api_key()?, config::get_base_url())?
        .with_model(config::get_model());

    Ok(Arc::new(QueryService::new(db, Arc::new(index), Arc::new(llm), top_k)))
}

/// Print one outcome as the formatted answer block.
pub fn print_outcome(outcome: &QueryOutcome) {
    match outcome {
        QueryOutcome::Success(QuerySuccess { sql_query, results, insight, tables_used }) => {
            println!("SQL Query:\n{sql_query}\n");
            println!("Results:\n{results}\n");
            println!("Insight:\n{insight}\n");
            println!("Tables Used: {}", tables_used.join(", "));
        },
        QueryOutcome::Failure(failure) => {
            println!("Error: {}", failure.error);
        },
    }
}
