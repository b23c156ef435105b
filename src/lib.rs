//! # Order Feeder
//!
//! > **Synthetic order traffic for a DynamoDB table.**
//!
//! This crate fabricates random order records and writes them one at a time to a
//! key-value table, pausing between writes, until the operator interrupts it.
//!
//! ## 🏗️ Design Philosophy
//!
//! The loop is deliberately plain: generate a record, put it, sleep, repeat.
//! There is no batching, no retrying and no concurrency. What structure there is
//! sits at two seams:
//! - **[`RecordSource`](generator::RecordSource)**: where records come from.
//! - **[`OrderStore`](store::OrderStore)**: where records go.
//!
//! Both are traits, so the driver can be exercised with a fixed record and an
//! in-memory store.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! A failed put comes back as a [`StoreError`](store::StoreError) inside a
//! [`CycleOutcome`](driver::CycleOutcome). The driver reports it and moves on;
//! a single failed write never stops the process.
//!
//! ### 2. Explicit Wiring
//! The table handle lives in the store, the pacing in
//! [`DriverConfig`](config::DriverConfig). Both are passed to the driver at
//! construction; there are no process-wide singletons.
//!
//! ### 3. Exact Prices
//! Prices are rounded to cents and stored as [`rust_decimal::Decimal`], then
//! written as DynamoDB number text, so no binary floating-point value ever
//! reaches the table.
//!
//! ### 4. Observability
//! Status lines are `tracing` events. See the [`lifecycle::tracing`] module.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`OrderRecord`](model::OrderRecord) and its flat item form.
//! - [`generator`]: random record generation.
//! - [`store`]: the storage seam, DynamoDB and mock implementations.
//! - [`driver`]: the write loop and its state machine.
//! - [`config`]: fixed table, region, profile and interval.
//! - [`lifecycle`]: connection setup, interrupt handling, tracing.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Uses the "default" AWS profile, region ap-south-1, table OrdersRawTable
//! cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod config;
pub mod driver;
pub mod generator;
pub mod lifecycle;
pub mod model;
pub mod store;
