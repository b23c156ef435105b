//! # Process Lifecycle
//!
//! Wires the fixed configuration, the DynamoDB store, the record generator and
//! the write driver into one running process, and stops it on interrupt.
//!
//! ## Startup
//!
//! 1. **Tracing** - [`setup_tracing`] installs the console subscriber
//! 2. **Interrupts** - [`ShutdownSignal::install`] takes over Ctrl-C before any I/O
//! 3. **Connection** - [`connect`] loads the AWS profile/region and builds the store
//! 4. **Wiring** - [`FeederSystem`] hands store and generator to the driver
//!
//! ## Graceful Shutdown
//!
//! [`ShutdownSignal::recv`] resolves on Ctrl-C. The driver only looks at it between
//! cycles, so an in-flight put always finishes first. After that the process
//! exits with status 0.

pub mod feeder;
pub mod signal;
pub mod tracing;

pub use self::feeder::*;
pub use self::signal::*;
pub use self::tracing::*;
