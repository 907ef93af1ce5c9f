//! In-memory similarity index over schema documents.
//!
//! Built once at startup from the full document set and queried read-only
//! thereafter. With a handful of tables a linear cosine scan is the whole
//! index.

use std::cmp::Ordering;
use std::sync::Arc;

use sqlscout_core::SchemaDocument;
use sqlscout_embeddings::{EmbeddingError, EmbeddingProvider};

/// Top-k retrieval output: concatenated document text plus table names in
/// similarity-rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retrieval {
    pub schemas_text: String,
    pub table_names: Vec<String>,
}

struct IndexedDocument {
    document: SchemaDocument,
    embedding: Vec<f32>,
}

/// Immutable embedding index over the schema document set.
pub struct SchemaIndex {
    provider: Arc<dyn EmbeddingProvider>,
    entries: Vec<IndexedDocument>,
}

impl std::fmt::Debug for SchemaIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaIndex").field("documents", &self.entries.len()).finish_non_exhaustive()
    }
}

impl SchemaIndex {
    /// Batch-embed every document and build the index.
    pub fn build(
        provider: Arc<dyn EmbeddingProvider>,
        documents: Vec<SchemaDocument>,
    ) -> Result<Self, EmbeddingError> {
        let contents: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
        let embeddings = provider.embed_batch(&contents)?;

        let entries = documents
            .into_iter()
            .zip(embeddings)
            .map(|(document, embedding)| IndexedDocument { document, embedding })
            .collect::<Vec<_>>();

        tracing::info!(documents = entries.len(), "schema index built");
        Ok(Self { provider, entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Table names of every indexed document, in index order.
    #[must_use]
    pub fn table_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.document.table_name.clone()).collect()
    }

    /// Return the k most similar documents to `query`.
    ///
    /// `k` clamps to the index size. There is no "no match" outcome: any
    /// query, including an empty one, ranks the whole document set and takes
    /// the top of it. Deterministic for a fixed index and fixed k.
    pub fn retrieve(&self, query: &str, k: usize) -> Result<Retrieval, EmbeddingError> {
        let query_embedding = self.provider.embed(query)?;

        let mut ranked: Vec<(f32, &IndexedDocument)> = self
            .entries
            .iter()
            .map(|entry| (cosine_similarity(&query_embedding, &entry.embedding), entry))
            .collect();
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        let top: Vec<&IndexedDocument> =
            ranked.into_iter().take(k.max(1)).map(|(_, entry)| entry).collect();

        let schemas_text = top
            .iter()
            .map(|entry| entry.document.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let table_names = top.iter().map(|entry| entry.document.table_name.clone()).collect();

        Ok(Retrieval { schemas_text, table_names })
    }
}

/// Cosine similarity of two vectors; 0.0 when either has zero magnitude or
/// the lengths differ.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::build_schema_documents;
    use sqlscout_db::Database;

    /// Deterministic bag-of-words provider: hashes each word into a bucket.
    /// Shared vocabulary between query and document raises cosine similarity,
    /// which is all the ranking tests need.
    struct WordHashProvider;

    impl EmbeddingProvider for WordHashProvider {
        fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            let mut vector = vec![0.0f32; 128];
            for word in
                text.to_lowercase().split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
            {
                let mut h: usize = 0;
                for byte in word.bytes() {
                    h = h.wrapping_mul(31).wrapping_add(byte as usize);
                }
                vector[h % 128] += 1.0;
            }
            Ok(vector)
        }
    }

    fn demo_index() -> SchemaIndex {
        let db = Database::open_in_memory().unwrap();
        db.seed_demo_data().unwrap();
        let documents = build_schema_documents(&db).unwrap();
        SchemaIndex::build(Arc::new(WordHashProvider), documents).unwrap()
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = vec![0.5, 1.0, -2.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn cosine_handles_zero_and_mismatched_vectors() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn customers_question_ranks_customers_first() {
        let index = demo_index();
        let retrieval = index.retrieve("Show me all customers from California", 2).unwrap();
        assert_eq!(retrieval.table_names.len(), 2);
        assert!(retrieval.table_names.contains(&"customers".to_owned()));
        assert!(retrieval.schemas_text.contains("TABLE: customers"));
    }

    #[test]
    fn k_clamps_to_index_size() {
        let index = demo_index();
        let retrieval = index.retrieve("orders and revenue", 10).unwrap();
        assert_eq!(retrieval.table_names.len(), 4);
    }

    #[test]
    fn empty_query_still_returns_k_documents() {
        let index = demo_index();
        let retrieval = index.retrieve("", 2).unwrap();
        assert_eq!(retrieval.table_names.len(), 2);
    }

    #[test]
    fn retrieval_is_deterministic() {
        let index = demo_index();
        let first = index.retrieve("top customers by spending", 2).unwrap();
        let second = index.retrieve("top customers by spending", 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn documents_concatenate_with_blank_line() {
        let index = demo_index();
        let retrieval = index.retrieve("products in orders", 2).unwrap();
        assert_eq!(retrieval.schemas_text.matches("\n\nTABLE: ").count(), 1);
    }
}
