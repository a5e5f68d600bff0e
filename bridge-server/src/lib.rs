//! Label Bridge Server - ERP inventory to ZPL label printer bridge
//!
//! # Architecture overview
//!
//! The bridge accepts a batch of item codes from an operator form, looks
//! each item up in an ERPNext-style inventory API, renders a ZPL label for
//! the selected variant, and ships it to a networked label printer over
//! raw TCP (port 9100).
//!
//! # Module structure
//!
//! ```text
//! bridge-server/src/
//! ├── core/          # config, state, server
//! ├── erp/           # inventory API client and item models
//! ├── labels/        # label variants, field extraction, ZPL templates
//! ├── printing/      # transport seam and the batch print pipeline
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging setup
//! ```

pub mod api;
pub mod core;
pub mod erp;
pub mod labels;
pub mod printing;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, ConfigError, Server, ServerState};
pub use erp::{ErpClient, FetchError, ItemRecord};
pub use labels::{LabelDocument, LabelVariant, RenderError};
pub use printing::{PrintOutcome, PrintPipeline};

// Re-export logger setup
pub use utils::logger::init_logger_with_file;

/// Prepare the process environment: `.env` file and logging.
///
/// Call once at the top of `main`, before anything emits tracing events.
pub fn setup_environment() {
    let _ = dotenv::dotenv();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(None, log_dir.as_deref());
}
