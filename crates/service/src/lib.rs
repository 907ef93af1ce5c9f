//! Request pipeline: retrieve relevant schemas, synthesize SQL, execute it,
//! summarize the result.
//!
//! Each question is a single linear pass with one branch point (execution
//! success or failure). Conversation history is an explicit value the caller
//! owns and threads through [`QueryService::ask`]; the service itself keeps
//! no per-user state.

mod error;

pub use error::ServiceError;

use std::sync::Arc;

use sqlscout_core::{Conversation, QueryOutcome, QuerySuccess};
use sqlscout_db::Database;
use sqlscout_llm::{prompts, LlmClient};
use sqlscout_retrieval::SchemaIndex;

/// Retrieval breadth when none is configured.
pub const DEFAULT_TOP_K: usize = 2;

pub struct QueryService {
    db: Database,
    index: Arc<SchemaIndex>,
    llm: Arc<LlmClient>,
    top_k: usize,
}

impl std::fmt::Debug for QueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService")
            .field("indexed_tables", &self.index.len())
            .field("top_k", &self.top_k)
            .finish_non_exhaustive()
    }
}

impl QueryService {
    #[must_use]
    pub fn new(db: Database, index: Arc<SchemaIndex>, llm: Arc<LlmClient>, top_k: usize) -> Self {
        Self { db, index, llm, top_k: top_k.max(1) }
    }

    /// Retrieval breadth in effect.
    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Table names currently indexed.
    #[must_use]
    pub fn indexed_tables(&self) -> Vec<String> {
        self.index.table_names()
    }

    /// Answer one question against the given conversation history.
    ///
    /// On success the conversation grows by exactly two turns (the question
    /// and the assistant's SQL + results); on a failed execution it is left
    /// untouched and the engine's error message is returned in the outcome.
    /// Provider and embedding failures propagate as [`ServiceError`] and
    /// likewise leave the conversation unchanged.
    pub async fn ask(
        &self,
        question: &str,
        conversation: &mut Conversation,
    ) -> Result<QueryOutcome, ServiceError> {
        tracing::debug!(question, "retrieving relevant schemas");
        let retrieval = {
            let index = Arc::clone(&self.index);
            let query = question.to_owned();
            let k = self.top_k;
            tokio::task::spawn_blocking(move || index.retrieve(&query, k)).await??
        };
        tracing::debug!(tables = ?retrieval.table_names, "schemas retrieved");

        let history_text = conversation.render();
        let prompt =
            prompts::sql_generation_prompt(&retrieval.schemas_text, &history_text, question);
        let raw_completion = self.llm.complete(&prompt).await?;
        let sql_query = prompts::strip_sql_fences(&raw_completion);
        tracing::debug!(sql = %sql_query, "sql synthesized");

        let execution = {
            let db = self.db.clone();
            let sql = sql_query.clone();
            tokio::task::spawn_blocking(move || db.run_query(&sql)).await?
        };
        let rows = match execution {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(error = %e, sql = %sql_query, "query execution failed");
                return Ok(QueryOutcome::failure(e.to_string()));
            },
        };

        let results = rows.render();
        let insight = self.llm.complete(&prompts::insight_prompt(&sql_query, &results)).await?;

        conversation.push_user(question);
        conversation.push_assistant(format!("SQL: {sql_query}\nResults: {results}"));

        Ok(QueryOutcome::Success(QuerySuccess {
            sql_query,
            results,
            insight,
            tables_used: retrieval.table_names,
        }))
    }
}

#[cfg(test)]
mod tests;
