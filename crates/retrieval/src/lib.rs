//! Schema-aware retrieval for sqlscout.
//!
//! Turns each table into a text document (business context + DDL + sample
//! rows) and serves top-k nearest-neighbor lookups over the embedded set.

mod index;
mod indexer;

pub use index::{cosine_similarity, Retrieval, SchemaIndex};
pub use indexer::{build_schema_documents, business_description};
