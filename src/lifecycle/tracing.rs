//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for the feeder.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`), so each status line reads as a sentence followed by its
//! structured fields. When `RUST_LOG` is unset the filter defaults to `info`, which
//! is the level the status lines are emitted at.
//!
//! ## What Gets Traced
//!
//! - **Connection**: Table, region and profile at startup
//! - **Write Cycles**: One line per successful write, one per failed write
//! - **Shutdown**: One line with the final cycle counters
//!
//! ## Usage Examples
//!
//! ```bash
//! # Status lines only (default)
//! cargo run
//!
//! # Show each generated record and put payload
//! RUST_LOG=debug cargo run
//!
//! # Include AWS SDK internals
//! RUST_LOG=debug,aws_smithy_runtime=trace cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Connecting table=OrdersRawTable region=ap-south-1 profile=default
//! INFO Driver started table="OrdersRawTable" interval=1s
//! INFO Inserted data: orderid=4211 product_name=Tablet quantity=2 price=347.18
//! WARN Error inserting data: orderid=918 product_name=Phone quantity=5 price=12.07 error=put_item on table OrdersRawTable failed: ...
//! INFO Interrupt received
//! INFO Stopped by manual intervention cycles=2 written=1 failed=1
//! ```
//!
//! **With `RUST_LOG=debug`** a `Generated record=OrderRecord { .. }` line precedes
//! every write, and the DynamoDB store logs the full item inside a
//! `put_item{table=OrdersRawTable}` span.
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Status lines read better without module paths
        .compact() // Compact format shows spans inline (e.g., "put_item{table=..}")
        .init();
}
