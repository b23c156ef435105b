//! # Record Generator
//!
//! Fabricates one [`OrderRecord`] per call. The generator owns its random
//! number generator; nothing else is shared, and a call can never fail.
//!
//! ## Draws
//!
//! | Field | Draw |
//! |-------|------|
//! | order id | uniform integer in [`ORDER_ID_RANGE`], as decimal text |
//! | product name | uniform over [`ProductName::ALL`] |
//! | quantity | uniform integer in [`QUANTITY_RANGE`] |
//! | price | uniform real between [`PRICE_MIN`] and [`PRICE_MAX`], rounded to cents |
//!
//! The price is rounded before it becomes a [`Decimal`], so the value that
//! reaches the store is the exact cents amount with scale 2.
//!
//! ## Seeding
//!
//! [`OrderGenerator::new`] seeds from OS entropy. Tests use
//! [`OrderGenerator::seeded`] for reproducible sequences.
//!
//! ```rust
//! use order_feeder::generator::{OrderGenerator, RecordSource};
//!
//! let mut generator = OrderGenerator::seeded(7);
//! let record = generator.next_record();
//! assert!((1..=5).contains(&record.quantity));
//! ```

use crate::model::{OrderRecord, ProductName};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::ops::RangeInclusive;

/// Bounds for the drawn order id.
pub const ORDER_ID_RANGE: RangeInclusive<u32> = 1..=10_000;
/// Bounds for the drawn quantity.
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=5;
/// Lowest price, in currency units.
pub const PRICE_MIN: f64 = 10.0;
/// Highest price, in currency units.
pub const PRICE_MAX: f64 = 500.0;

/// Anything that can hand the driver its next record.
///
/// The driver only depends on this trait, which keeps it testable with a fixed
/// sequence of records.
pub trait RecordSource: Send {
    fn next_record(&mut self) -> OrderRecord;
}

/// Random [`OrderRecord`] generator.
pub struct OrderGenerator<R: Rng = StdRng> {
    rng: R,
}

impl OrderGenerator<StdRng> {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for OrderGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> OrderGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a fresh record.
    pub fn generate(&mut self) -> OrderRecord {
        let order_id = self.rng.gen_range(ORDER_ID_RANGE);
        // ALL is a non-empty constant, so the fallback is never taken
        let product_name = ProductName::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(ProductName::Laptop);
        let quantity = self.rng.gen_range(QUANTITY_RANGE);
        let price = round_to_cents(self.rng.gen_range(PRICE_MIN..=PRICE_MAX));

        OrderRecord::new(order_id, product_name, quantity, price)
    }
}

impl<R: Rng + Send> RecordSource for OrderGenerator<R> {
    fn next_record(&mut self) -> OrderRecord {
        self.generate()
    }
}

/// Rounds half away from zero to two places and fixes the scale at 2.
fn round_to_cents(amount: f64) -> Decimal {
    let cents = (amount * 100.0).round() as i64;
    Decimal::new(cents, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_records_stay_in_bounds() {
        let mut generator = OrderGenerator::seeded(1);
        let min_price = Decimal::new(1000, 2);
        let max_price = Decimal::new(50000, 2);

        for _ in 0..10_000 {
            let record = generator.generate();

            let id: u32 = record.order_id.0.parse().expect("order id is numeric text");
            assert!(ORDER_ID_RANGE.contains(&id), "order id out of range: {id}");
            assert_eq!(record.order_id.0, id.to_string(), "no padding or sign");

            assert!(ProductName::ALL.contains(&record.product_name));
            assert!(QUANTITY_RANGE.contains(&record.quantity));

            assert_eq!(record.price.scale(), 2, "price {} not in cents", record.price);
            assert!(record.price >= min_price && record.price <= max_price);
        }
    }

    #[test]
    fn test_product_distribution_is_roughly_uniform() {
        let mut generator = OrderGenerator::seeded(2);
        let draws = 50_000;
        let mut counts: HashMap<ProductName, usize> = HashMap::new();

        for _ in 0..draws {
            *counts.entry(generator.generate().product_name).or_default() += 1;
        }

        let expected = draws / ProductName::ALL.len();
        for product in ProductName::ALL {
            let count = counts.get(&product).copied().unwrap_or(0);
            // 10% tolerance is far outside sampling noise at this size
            assert!(
                count.abs_diff(expected) < expected / 10,
                "{product} drawn {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let mut a = OrderGenerator::seeded(99);
        let mut b = OrderGenerator::seeded(99);
        for _ in 0..100 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_consecutive_records_are_not_required_to_match() {
        let mut generator = OrderGenerator::seeded(3);
        let records: Vec<OrderRecord> = (0..20).map(|_| generator.generate()).collect();
        assert!(records.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(199.994).to_string(), "199.99");
        assert_eq!(round_to_cents(10.0).to_string(), "10.00");
        assert_eq!(round_to_cents(500.0).to_string(), "500.00");
        assert_eq!(round_to_cents(42.5).to_string(), "42.50");
        assert_eq!(round_to_cents(12.345_678).to_string(), "12.35");
    }
}
