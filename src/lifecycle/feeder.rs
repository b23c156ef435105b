use crate::config::FeederConfig;
use crate::driver::{DriverStats, WriteDriver};
use crate::generator::OrderGenerator;
use crate::lifecycle::ShutdownSignal;
use crate::store::{DynamoStore, OrderStore};
use aws_config::{BehaviorVersion, Region};
use std::future::Future;
use tracing::info;

/// The runtime orchestrator for a feeder process.
///
/// `FeederSystem` is responsible for:
/// - **Connection Setup**: Turning [`FeederConfig`] into a ready [`DynamoStore`]
/// - **Wiring**: Handing the store and a fresh [`OrderGenerator`] to the [`WriteDriver`]
/// - **Shutdown**: Stopping the driver when the operator interrupts the process
///
/// # Example
///
/// ```ignore
/// let shutdown = ShutdownSignal::install().await;
/// let system = FeederSystem::connect(FeederConfig::default()).await;
/// let stats = system.run_until(shutdown.recv()).await;
/// ```
pub struct FeederSystem<S: OrderStore = DynamoStore> {
    driver: WriteDriver<S, OrderGenerator>,
}

impl FeederSystem<DynamoStore> {
    /// Loads the AWS configuration for the configured profile and region and
    /// builds a system writing to the configured table.
    pub async fn connect(config: FeederConfig) -> Self {
        let store = connect(&config).await;
        Self::with_store(config, store)
    }
}

impl<S: OrderStore> FeederSystem<S> {
    /// Builds a system around an already constructed store.
    pub fn with_store(config: FeederConfig, store: S) -> Self {
        let driver = WriteDriver::new(config.driver_config(), store, OrderGenerator::new());
        Self { driver }
    }

    /// Runs until `shutdown` completes.
    pub async fn run_until<F: Future>(self, shutdown: F) -> DriverStats {
        self.driver.run_until(shutdown).await
    }

    /// Runs until the process receives Ctrl-C.
    ///
    /// The handler is installed before the first write, so an interrupt during
    /// that write still ends the run cleanly.
    pub async fn run(self) -> DriverStats {
        let shutdown = ShutdownSignal::install().await;
        self.run_until(shutdown.recv()).await
    }
}

/// Builds the DynamoDB store described by `config`.
pub async fn connect(config: &FeederConfig) -> DynamoStore {
    info!(
        table = %config.table_name,
        region = %config.region,
        profile = %config.profile,
        "Connecting"
    );

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .profile_name(&config.profile)
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    DynamoStore::from_sdk_config(&sdk_config, config.table_name.clone())
}
