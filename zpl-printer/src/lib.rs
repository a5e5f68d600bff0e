//! # zpl-printer
//!
//! ZPL II label printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ZPL II command building
//! - Field-data escaping (`^FH` hex escapes)
//! - Network printing (TCP port 9100)
//!
//! Business logic (WHAT to print) should stay in application code:
//! - Label templates and field extraction → bridge-server
//!
//! ## Example
//!
//! ```ignore
//! use zpl_printer::{NetworkPrinter, Printer, ZplBuilder};
//!
//! // Build a ZPL document
//! let mut builder = ZplBuilder::new();
//! builder.print_width(1060);
//! builder.label_length(365);
//! builder.text_field(10, 20, 50, 50, "WIDGET-42");
//! let document = builder.build();
//!
//! // Send to network printer
//! let printer = NetworkPrinter::new("192.168.1.50", 9100);
//! printer.print(document.as_bytes()).await?;
//! ```

mod error;
mod printer;
mod zpl;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use printer::{NetworkPrinter, Printer};
pub use zpl::{ZplBuilder, escape_field_data};
