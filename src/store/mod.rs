//! Storage substrate: collections, transactions, and record validation

mod file;
mod registry;
mod schema;

pub use file::{FileCollection, FileTransaction};
pub use registry::Registry;
pub use schema::{FieldType, Schema};

use thiserror::Error;

/// One decoded record: a mapping of field name to JSON value.
pub type Record = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The record's shape does not match what the collection accepts.
    /// Recoverable per line; the reloader counts it as a skip.
    #[error("record rejected: {reason}")]
    Rejected { reason: String },

    /// The collection's data file exists but does not parse.
    #[error("collection data at {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A named, typed store of records.
pub trait Collection {
    /// Transaction handle; holds the collection borrowed for its whole scope,
    /// so one invocation has exclusive access.
    type Txn<'a>: Transaction
    where
        Self: 'a;

    /// Human-readable identifier used in reports.
    fn label(&self) -> &str;

    /// Begin an atomic transaction over the collection's contents.
    fn begin(&mut self) -> Result<Self::Txn<'_>, StoreError>;
}

/// Mutations staged inside one atomic transaction.
///
/// Dropping a transaction without calling [`commit`](Transaction::commit)
/// rolls back every staged change.
pub trait Transaction {
    fn count(&self) -> usize;

    fn delete_all(&mut self);

    /// Stage one record for insertion.
    ///
    /// # Errors
    /// [`StoreError::Rejected`] if the record's fields don't match the
    /// collection's accepted shape; any other error is transaction-fatal.
    fn insert(&mut self, record: Record) -> Result<(), StoreError>;

    /// Make every staged change durable, atomically.
    fn commit(self) -> Result<(), StoreError>;
}
