//! Label transport seam
//!
//! Production sends over raw TCP via `zpl-printer`; tests substitute
//! recording or failing stubs.

use std::time::Duration;
use zpl_printer::{NetworkPrinter, PrintError, Printer};

use crate::core::config::PrinterEndpoint;
use crate::labels::LabelDocument;

/// Anything that can deliver a rendered label to a printer endpoint
#[allow(async_fn_in_trait)]
pub trait LabelTransport {
    /// Send one document to one endpoint; one connection per call
    async fn send(
        &self,
        endpoint: &PrinterEndpoint,
        document: &LabelDocument,
    ) -> Result<(), PrintError>;
}

/// Raw-TCP transport (port 9100 style), one short-lived connection per job
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    send_timeout: Duration,
}

impl NetworkTransport {
    /// Create a transport with the given per-job send timeout
    pub fn new(send_timeout: Duration) -> Self {
        Self { send_timeout }
    }
}

impl LabelTransport for NetworkTransport {
    async fn send(
        &self,
        endpoint: &PrinterEndpoint,
        document: &LabelDocument,
    ) -> Result<(), PrintError> {
        NetworkPrinter::new(&endpoint.host, endpoint.port)
            .with_timeout(self.send_timeout)
            .print(document.as_bytes())
            .await
    }
}
