use order_feeder::config::DriverConfig;
use order_feeder::driver::{DriverStats, WriteDriver};
use order_feeder::generator::{OrderGenerator, RecordSource};
use order_feeder::model::{FieldValue, Item, OrderRecord, ProductName};
use order_feeder::store::mock::MockStore;
use order_feeder::store::StoreError;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::oneshot;

/// Record source that always yields the same record.
struct FixedSource(OrderRecord);

impl RecordSource for FixedSource {
    fn next_record(&mut self) -> OrderRecord {
        self.0.clone()
    }
}

fn laptop_order() -> OrderRecord {
    OrderRecord::new("42", ProductName::Laptop, 3, Decimal::new(19999, 2))
}

/// A fixed source must reach the store as exactly the four-field mapping.
#[tokio::test]
async fn test_driver_submits_exact_mapping() {
    let mut mock = MockStore::new("OrdersRawTable");
    mock.expect_put().return_ok();

    let mut driver = WriteDriver::new(
        DriverConfig::default(),
        mock.store(),
        FixedSource(laptop_order()),
    );
    driver.run_cycle().await;

    let expected: Item = [
        ("orderid", FieldValue::Text("42".to_string())),
        ("product_name", FieldValue::Text("Laptop".to_string())),
        ("quantity", FieldValue::Integer(3)),
        ("price", FieldValue::Decimal(Decimal::new(19999, 2))),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect();

    assert_eq!(mock.submitted(), vec![expected]);
    mock.verify();
}

/// A failed write on one cycle must not stop the next cycle from writing.
#[tokio::test(start_paused = true)]
async fn test_failed_write_does_not_stop_next_cycle() {
    let mut mock = MockStore::new("OrdersRawTable");
    mock.expect_put().return_ok();
    mock.expect_put()
        .return_err(StoreError::put_failed("OrdersRawTable", "ThrottlingException"));
    mock.expect_put().return_ok();

    let driver = WriteDriver::new(
        DriverConfig::default(),
        mock.store(),
        OrderGenerator::seeded(5),
    );

    // Cycles start at 0s, 1s and 2s; stop in the pause after the third.
    let stats = driver
        .run_until(tokio::time::sleep(Duration::from_millis(2_500)))
        .await;

    assert_eq!(
        stats,
        DriverStats {
            cycles: 3,
            written: 2,
            failed: 1
        }
    );

    let submitted = mock.submitted();
    assert_eq!(submitted.len(), 3);
    // The cycle after the failure wrote a fresh record rather than retrying
    let mut replay = OrderGenerator::seeded(5);
    for item in &submitted {
        assert_eq!(item, &replay.generate().to_item());
    }
    mock.verify();
}

/// Cancelling while the driver sleeps between cycles ends the run with no further writes.
#[tokio::test(start_paused = true)]
async fn test_cancel_during_pause_stops_cleanly() {
    let mock = MockStore::new("OrdersRawTable");
    let (cancel, cancelled) = oneshot::channel::<()>();

    let driver = WriteDriver::new(
        DriverConfig::default(),
        mock.store(),
        OrderGenerator::seeded(6),
    );
    let run = tokio::spawn(driver.run_until(cancelled));

    // The first write happens immediately; cancel midway through the pause.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(mock.submitted().len(), 1);
    cancel.send(()).unwrap();

    let stats = run.await.unwrap();
    assert_eq!(stats.cycles, 1);

    // Nothing else gets written afterwards
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(mock.submitted().len(), 1);
}

/// An in-flight write completes before a cancellation takes effect.
#[tokio::test(start_paused = true)]
async fn test_cancel_during_write_lets_write_finish() {
    let mock = MockStore::new("OrdersRawTable").with_latency(Duration::from_millis(500));

    let driver = WriteDriver::new(
        DriverConfig::default(),
        mock.store(),
        OrderGenerator::seeded(7),
    );

    // Writes run 0-0.5s and 1.5-2.0s; the cancel lands inside the second write.
    let stats = driver
        .run_until(tokio::time::sleep(Duration::from_millis(1_700)))
        .await;

    assert_eq!(
        stats,
        DriverStats {
            cycles: 2,
            written: 2,
            failed: 0
        }
    );
    assert_eq!(mock.submitted().len(), 2);
}
