//! Typed error enum for the service layer.
//!
//! Unifies database, LLM, and embedding failures into one type so callers
//! can match on the failure mode instead of downcasting opaque boxes.
//! SQL execution failures are NOT errors at this level; the pipeline
//! catches them and returns `QueryOutcome::Failure`.

use sqlscout_db::DbError;
use sqlscout_embeddings::EmbeddingError;
use sqlscout_llm::LlmError;
use thiserror::Error;

/// Service-layer error unifying the pipeline's external dependencies.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Database failure outside query execution (open, introspection).
    #[error("database: {0}")]
    Db(#[from] DbError),

    /// Chat-completion call failed after retries.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// Embedding generation failed.
    #[error("embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Background task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Llm(e) => e.is_transient(),
            _ => false,
        }
    }
}
