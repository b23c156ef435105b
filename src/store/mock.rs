//! # Mock Store & Testing Guide
//!
//! `MockStore` implements [`OrderStore`] entirely in memory. It records every
//! item it is handed and answers each put from a queue of expectations, which
//! makes write failures trivial to simulate.
//!
//! ## When to use the Mock vs DynamoDB
//!
//! | Feature | MockStore | DynamoStore |
//! |---------|-----------|-------------|
//! | **Speed** | Instant (in-memory) | Network round-trip |
//! | **Determinism** | 100% Deterministic | Subject to throttling, network |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//! | **Use Case** | Driver and lifecycle logic | Manual runs against a real table |
//!
//! ## Example
//!
//! ```rust
//! use order_feeder::model::{OrderRecord, ProductName};
//! use order_feeder::store::mock::MockStore;
//! use order_feeder::store::{OrderStore, StoreError};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::new("OrdersRawTable");
//!     mock.expect_put()
//!         .return_err(StoreError::put_failed("OrdersRawTable", "throttled"));
//!     mock.expect_put().return_ok();
//!
//!     let store = mock.store();
//!     let item = OrderRecord::new("1", ProductName::Phone, 2, Decimal::new(5000, 2)).to_item();
//!
//!     assert!(store.put_item(item.clone()).await.is_err());
//!     assert!(store.put_item(item).await.is_ok());
//!
//!     assert_eq!(mock.submitted().len(), 2);
//!     mock.verify();
//! }
//! ```
//!
//! Puts arriving after the queue is empty succeed, so a test only needs to
//! queue the outcomes it cares about.

use crate::model::Item;
use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Queued answer for the next put.
enum Expectation {
    Put { response: Result<(), StoreError> },
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    submitted: Vec<Item>,
}

/// A mock store with expectation tracking for fluent testing.
///
/// Clones share state, so the handle passed to the code under test and the one
/// kept by the test see the same expectations and submissions.
#[derive(Clone)]
pub struct MockStore {
    table_name: String,
    latency: Option<Duration>,
    state: Arc<Mutex<MockState>>,
}

impl MockStore {
    /// Creates a new mock store with no expectations.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            latency: None,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Makes every put take `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Returns a handle for use in tests.
    pub fn store(&self) -> MockStore {
        self.clone()
    }

    /// Expects a `put_item` call.
    pub fn expect_put(&mut self) -> PutExpectationBuilder {
        PutExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Items handed to `put_item`, in call order, failed ones included.
    pub fn submitted(&self) -> Vec<Item> {
        self.state.lock().unwrap().submitted.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl OrderStore for MockStore {
    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.state.lock().unwrap();
        state.submitted.push(item);
        match state.expectations.pop_front() {
            Some(Expectation::Put { response }) => response,
            None => Ok(()),
        }
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Builder for `put_item` expectations.
pub struct PutExpectationBuilder {
    state: Arc<Mutex<MockState>>,
}

impl PutExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Put { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Put {
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderRecord, ProductName};
    use rust_decimal::Decimal;

    fn sample_item() -> Item {
        OrderRecord::new("5", ProductName::Tablet, 4, Decimal::new(12345, 2)).to_item()
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::new("orders");
        mock.expect_put().return_ok();
        mock.expect_put()
            .return_err(StoreError::put_failed("orders", "ProvisionedThroughputExceeded"));

        let store = mock.store();
        assert!(store.put_item(sample_item()).await.is_ok());

        let err = store.put_item(sample_item()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "put_item on table orders failed: ProvisionedThroughputExceeded"
        );

        assert_eq!(mock.submitted(), vec![sample_item(), sample_item()]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_unqueued_puts_succeed() {
        let mock = MockStore::new("orders");
        assert!(mock.store().put_item(sample_item()).await.is_ok());
        assert_eq!(mock.store().table_name(), "orders");
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_panics_on_leftovers() {
        let mut mock = MockStore::new("orders");
        mock.expect_put().return_ok();
        mock.verify();
    }
}
