//! # Storage Collaborator
//!
//! The driver writes through the [`OrderStore`] trait and nothing else. The
//! trait has exactly one data operation, a single-item put; table creation,
//! indexing and queries belong to whoever owns the table.
//!
//! - [`DynamoStore`] writes to an Amazon DynamoDB table.
//! - [`mock::MockStore`] keeps everything in memory and lets tests queue
//!   successes and failures.

pub mod dynamodb;
pub mod error;
pub mod mock;

pub use dynamodb::DynamoStore;
pub use error::StoreError;

use crate::model::Item;
use async_trait::async_trait;

/// A key-value table accepting single-item writes.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Writes one item. No retries happen at this layer.
    async fn put_item(&self, item: Item) -> Result<(), StoreError>;

    /// Name of the table items land in.
    fn table_name(&self) -> &str;
}
