//! Flat item representation handed to the store.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// A typed attribute value.
///
/// Only the three shapes an order record needs are modelled. Stores decide how
/// each maps onto their own wire types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// Exact decimal, never converted through `f64`.
    Decimal(Decimal),
}

/// Field name to value mapping for a single-item put.
pub type Item = BTreeMap<String, FieldValue>;
