//! # Write Driver
//!
//! The driver is the whole runtime of the feeder: generate a record, put it,
//! wait, repeat. It runs in the caller's task; nothing is spawned.
//!
//! ## States
//!
//! ```text
//!            write ok / write failed
//!              ┌──────────┐
//!              ▼          │
//!   start ─► Running ─────┘
//!              │
//!              │ shutdown future completes
//!              ▼
//!           Stopped (terminal)
//! ```
//!
//! ## Failure Policy
//!
//! A failed put is reported with the record and the error, counted, and the
//! loop carries on with the next cycle. Nothing is retried: the next cycle
//! writes a brand new record.
//!
//! ## Cancellation
//!
//! The shutdown future is only raced against the pause between cycles, never
//! against the put itself. A shutdown that lands mid-write lets the write
//! finish, then the driver stops before generating another record.

use crate::config::DriverConfig;
use crate::generator::RecordSource;
use crate::model::OrderRecord;
use crate::store::{OrderStore, StoreError};
use std::future::Future;
use tracing::{debug, info, warn};

/// Where the driver is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// Result of one generate-then-write cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Written(OrderRecord),
    Failed { record: OrderRecord, error: StoreError },
}

impl CycleOutcome {
    pub fn record(&self) -> &OrderRecord {
        match self {
            CycleOutcome::Written(record) => record,
            CycleOutcome::Failed { record, .. } => record,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, CycleOutcome::Written(_))
    }
}

/// Counters reported when the driver stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub cycles: u64,
    pub written: u64,
    pub failed: u64,
}

impl DriverStats {
    fn record(&mut self, outcome: &CycleOutcome) {
        self.cycles += 1;
        if outcome.is_written() {
            self.written += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Drives records from a [`RecordSource`] into an [`OrderStore`].
pub struct WriteDriver<S: OrderStore, G: RecordSource> {
    config: DriverConfig,
    store: S,
    source: G,
    state: DriverState,
    stats: DriverStats,
}

impl<S: OrderStore, G: RecordSource> WriteDriver<S, G> {
    pub fn new(config: DriverConfig, store: S, source: G) -> Self {
        Self {
            config,
            store,
            source,
            state: DriverState::Running,
            stats: DriverStats::default(),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    /// Generates one record, writes it and reports the outcome.
    ///
    /// Never fails: a store error comes back as [`CycleOutcome::Failed`].
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let record = self.source.next_record();
        debug!(?record, "Generated");

        let outcome = match self.store.put_item(record.to_item()).await {
            Ok(()) => {
                info!("Inserted data: {record}");
                CycleOutcome::Written(record)
            }
            Err(error) => {
                warn!(%error, "Error inserting data: {record}");
                CycleOutcome::Failed { record, error }
            }
        };

        self.stats.record(&outcome);
        outcome
    }

    /// Runs cycles until `shutdown` completes, then returns the final counters.
    ///
    /// The first cycle always runs; `shutdown` is checked after every write.
    pub async fn run_until<F: Future>(mut self, shutdown: F) -> DriverStats {
        tokio::pin!(shutdown);
        info!(
            table = self.store.table_name(),
            interval = ?self.config.write_interval,
            "Driver started"
        );

        while self.state == DriverState::Running {
            self.run_cycle().await;

            tokio::select! {
                biased;
                _ = &mut shutdown => self.state = DriverState::Stopped,
                _ = tokio::time::sleep(self.config.write_interval) => {}
            }
        }

        info!(
            cycles = self.stats.cycles,
            written = self.stats.written,
            failed = self.stats.failed,
            "Stopped by manual intervention"
        );
        self.stats
    }
}
