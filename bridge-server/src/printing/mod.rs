//! Batch print pipeline
//!
//! Drives fetch → render → send for each item of a batch, sequentially and
//! with per-item failure isolation. The seams ([`crate::erp::ItemSource`],
//! [`LabelTransport`]) keep the loop testable without a live ERP or printer.

mod pipeline;
mod transport;

pub use pipeline::{PrintOutcome, PrintPipeline};
pub use transport::{LabelTransport, NetworkTransport};
