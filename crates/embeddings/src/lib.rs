//! Embedding generation for schema retrieval.
//!
//! Wraps fastembed's all-MiniLM-L6-v2 model behind the [`EmbeddingProvider`]
//! trait so retrieval code and tests can supply alternate providers.

pub mod error;

pub use error::EmbeddingError;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::Mutex;

/// Output dimension of all-MiniLM-L6-v2.
pub const EMBEDDING_DIMENSION: usize = 384;

/// Anything that can turn text into a fixed-width vector.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embed several texts; the default implementation loops over [`embed`].
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}

/// Local embedding model. Construction downloads/loads the model, so build
/// it once at startup and share it.
///
/// Embedding is CPU-bound; callers on an async runtime should wrap calls in
/// `spawn_blocking`.
pub struct EmbeddingService {
    model: Mutex<TextEmbedding>,
}

impl std::fmt::Debug for EmbeddingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingService")
            .field("dimension", &EMBEDDING_DIMENSION)
            .finish_non_exhaustive()
    }
}

impl EmbeddingService {
    pub fn new() -> Result<Self, EmbeddingError> {
        tracing::info!("loading embedding model (all-MiniLM-L6-v2)");
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )
        .map_err(|e| EmbeddingError::ModelInit(e.to_string()))?;
        Ok(Self { model: Mutex::new(model) })
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    fn run_model(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut model = self.model.lock().map_err(|_| EmbeddingError::LockPoisoned)?;
        let embeddings =
            model.embed(texts, None).map_err(|e| EmbeddingError::Generation(e.to_string()))?;
        if embeddings.is_empty() {
            return Err(EmbeddingError::EmptyResult);
        }
        Ok(embeddings)
    }
}

impl EmbeddingProvider for EmbeddingService {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut embeddings = self.run_model(vec![text.to_owned()])?;
        embeddings.pop().ok_or(EmbeddingError::EmptyResult)
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.run_model(texts.to_vec())
    }
}
