//! Operator interrupt handling.
//!
//! `tokio::signal::ctrl_c` only registers its handler when first polled. Until
//! then SIGINT keeps its default action and kills the process, so the handler
//! is installed up front with [`ShutdownSignal::install`] and awaited later
//! with [`ShutdownSignal::recv`].

use std::future::Future;
use std::io;
use std::pin::Pin;
use tracing::{error, info};

type Interrupt = Pin<Box<dyn Future<Output = io::Result<()>> + Send>>;

/// An installed Ctrl-C handler.
pub struct ShutdownSignal {
    interrupt: Interrupt,
    early: Option<io::Result<()>>,
}

impl ShutdownSignal {
    /// Installs the handler. From this point on an interrupt no longer
    /// terminates the process; it completes [`recv`](Self::recv) instead.
    pub async fn install() -> Self {
        let mut interrupt: Interrupt = Box::pin(tokio::signal::ctrl_c());

        // One poll registers the handler
        let early = tokio::select! {
            biased;
            result = &mut interrupt => Some(result),
            _ = std::future::ready(()) => None,
        };

        Self { interrupt, early }
    }

    /// Completes when the operator interrupts the process.
    ///
    /// If the handler could not be installed the failure is logged and the
    /// future never completes, so the feeder keeps running.
    pub async fn recv(self) {
        let result = match self.early {
            Some(result) => result,
            None => self.interrupt.await,
        };

        match result {
            Ok(()) => info!("Interrupt received"),
            Err(e) => {
                error!(error = %e, "Failed to install interrupt handler");
                std::future::pending::<()>().await
            }
        }
    }
}
