//! The per-item print loop
//!
//! Items are processed sequentially, in input order: label printing is
//! I/O-bound against a single physical printer per variant, so there is
//! nothing to win by overlapping items within one batch. Each transport
//! call opens its own connection, so concurrent HTTP requests cannot
//! interleave partial writes either.

use tracing::{info, instrument, warn};

use super::transport::LabelTransport;
use crate::core::config::PrinterRouting;
use crate::erp::ItemSource;
use crate::labels::{self, LabelVariant};

/// Outcome of processing one item code
///
/// `ok` plus `detail` is the machine-readable form; [`std::fmt::Display`]
/// renders the operator-facing message the HTTP surface returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOutcome {
    /// The item code this outcome belongs to, as submitted
    pub code: String,
    /// Whether the label was written to the printer socket
    pub ok: bool,
    /// Failure cause description; empty on success
    pub detail: String,
}

impl PrintOutcome {
    fn success(code: &str) -> Self {
        Self {
            code: code.to_string(),
            ok: true,
            detail: String::new(),
        }
    }

    fn failure(code: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            code: code.to_string(),
            ok: false,
            detail: cause.to_string(),
        }
    }
}

impl std::fmt::Display for PrintOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ok {
            write!(f, "Label for {} sent to printer successfully.", self.code)
        } else {
            write!(f, "Error processing {}: {}", self.code, self.detail)
        }
    }
}

/// The batch orchestrator: fetch → render → send per item
pub struct PrintPipeline<S, T> {
    source: S,
    transport: T,
    routing: PrinterRouting,
}

impl<S: ItemSource, T: LabelTransport> PrintPipeline<S, T> {
    /// Wire a pipeline from its collaborators
    pub fn new(source: S, transport: T, routing: PrinterRouting) -> Self {
        Self {
            source,
            transport,
            routing,
        }
    }

    /// Process a batch of item codes for one label variant
    ///
    /// Returns exactly one outcome per input code, in input order. No
    /// item's failure aborts the batch or leaks out of this method.
    #[instrument(skip(self, codes), fields(batch_size = codes.len(), variant = %variant))]
    pub async fn process_batch(&self, codes: &[String], variant: LabelVariant) -> Vec<PrintOutcome> {
        let mut outcomes = Vec::with_capacity(codes.len());
        for code in codes {
            outcomes.push(self.process_one(code.trim(), variant).await);
        }
        outcomes
    }

    async fn process_one(&self, code: &str, variant: LabelVariant) -> PrintOutcome {
        if code.is_empty() {
            return PrintOutcome::failure(code, "empty item code");
        }

        let record = match self.source.fetch_item(code).await {
            Ok(record) => record,
            Err(e) => {
                warn!(code = %code, error = %e, "Item lookup failed");
                return PrintOutcome::failure(code, e);
            }
        };

        let endpoint = self.routing.endpoint_for(variant);

        let document = match labels::render(variant, &record) {
            Ok(document) => document,
            Err(e) => {
                warn!(code = %code, error = %e, "Field extraction failed");
                return PrintOutcome::failure(code, e);
            }
        };

        match self.transport.send(&endpoint, &document).await {
            Ok(()) => {
                info!(code = %code, dest = %endpoint, bytes = document.len(), "Label sent");
                PrintOutcome::success(code)
            }
            Err(e) => {
                warn!(code = %code, dest = %endpoint, error = %e, "Print failed");
                PrintOutcome::failure(code, e)
            }
        }
    }
}
