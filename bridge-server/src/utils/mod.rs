//! Shared utilities
//!
//! Currently just the logging setup; see [`logger`].

pub mod logger;

pub use logger::init_logger_with_file;
