use order_feeder::config::FeederConfig;
use order_feeder::lifecycle::{setup_tracing, FeederSystem, ShutdownSignal};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    // Before any I/O, so an interrupt during connect or the first write is handled
    let shutdown = ShutdownSignal::install().await;

    let config = FeederConfig::default();
    info!(table = %config.table_name, "Starting order feeder");

    let system = FeederSystem::connect(config).await;
    let stats = system.run_until(shutdown.recv()).await;

    info!(written = stats.written, failed = stats.failed, "Order feeder exited");
    Ok(())
}
