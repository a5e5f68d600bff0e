//! Configuration, state and server lifecycle

pub mod config;
mod server;
mod state;

pub use config::{Config, ConfigError, ErpConfig, PrinterEndpoint, PrinterRouting};
pub use server::Server;
pub use state::{BridgePipeline, ServerState};
