//! Typed error enum for the database layer.

use thiserror::Error;

/// Errors from opening, introspecting, or querying the relational store.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database file could not be opened.
    #[error("failed to open database: {0}")]
    Open(#[source] rusqlite::Error),

    /// SQL statement failed (syntax, unknown column, constraint, I/O).
    /// The message is whatever the engine reported.
    #[error("{0}")]
    Sql(#[from] rusqlite::Error),

    /// Connection mutex poisoned by a panicking thread.
    #[error("database lock poisoned")]
    LockPoisoned,

    /// Introspected table has no stored DDL (virtual or internal table).
    #[error("no schema found for table: {0}")]
    MissingSchema(String),
}
