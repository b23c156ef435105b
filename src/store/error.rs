//! Error types for the storage collaborator.

use thiserror::Error;

/// Errors a single-item put can end with.
///
/// The driver treats every variant the same way: report and move on.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The table rejected the item or the request never completed.
    #[error("put_item on table {table} failed: {message}")]
    PutFailed { table: String, message: String },
}

impl StoreError {
    pub fn put_failed(table: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::PutFailed {
            table: table.into(),
            message: message.into(),
        }
    }
}
