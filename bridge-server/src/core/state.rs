//! Server state - the read-only collaborators every handler shares

use std::sync::Arc;

use crate::core::Config;
use crate::erp::{ErpClient, FetchError};
use crate::printing::{NetworkTransport, PrintPipeline};

/// The production pipeline wiring: real ERP client, real TCP transport
pub type BridgePipeline = PrintPipeline<ErpClient, NetworkTransport>;

/// Shared server state
///
/// Built once at startup from the immutable [`Config`] and cloned into
/// every request handler; `Arc` keeps the clones shallow. Nothing in here
/// is mutable after initialization. The config itself stays with
/// [`super::Server`], which owns the listen and timeout settings.
#[derive(Clone)]
pub struct ServerState {
    /// The batch print pipeline
    pub pipeline: Arc<BridgePipeline>,
}

impl ServerState {
    /// Wire the production services from configuration
    pub fn initialize(config: &Config) -> Result<Self, FetchError> {
        let client = ErpClient::new(&config.erp)?;
        let transport = NetworkTransport::new(config.printers.send_timeout);
        let pipeline = PrintPipeline::new(client, transport, config.printers.clone());

        Ok(Self {
            pipeline: Arc::new(pipeline),
        })
    }
}
