//! Printer adapter for sending ZPL data
//!
//! Network printers only: virtually every label printer speaks raw TCP on
//! port 9100. One connection per job, write, flush, close. The protocol is
//! send-only; the printer never acknowledges.

use crate::error::{PrintError, PrintResult};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send raw ZPL data to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check if the printer is online/reachable
    async fn is_online(&self) -> bool;
}

/// Network printer (TCP port 9100)
///
/// Accepts hostnames as well as IP addresses; resolution happens at connect
/// time so DHCP address changes between jobs are picked up.
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    host: String,
    port: u16,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_secs(5),
        }
    }

    /// Set the send timeout (bounds connect, write and flush together)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the printer host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the printer port
    pub fn port(&self) -> u16 {
        self.port
    }

    fn addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(data), fields(host = %self.host, port = self.port, data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        info!("Connecting to printer");

        // One timeout bounds the whole job: a printer that accepts the
        // connection but stops draining must not stall the caller.
        let send = async {
            let mut stream = TcpStream::connect(self.addr()).await.map_err(|e| {
                PrintError::Connection(format!("{}:{}: {}", self.host, self.port, e))
            })?;

            info!("Connected, sending {} bytes", data.len());

            stream.write_all(data).await.map_err(|e| {
                PrintError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Write failed: {}", e),
                ))
            })?;

            stream.flush().await?;
            Ok::<(), PrintError>(())
        };

        tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| {
                PrintError::Timeout(format!("Send timeout: {}:{}", self.host, self.port))
            })??;

        // Connection drops here; no acknowledgement is read back.
        info!("Print job sent successfully");
        Ok(())
    }

    #[instrument(fields(host = %self.host, port = self.port))]
    async fn is_online(&self) -> bool {
        let check_timeout = Duration::from_millis(500);

        match tokio::time::timeout(check_timeout, TcpStream::connect(self.addr())).await {
            Ok(Ok(_)) => {
                info!("Printer online");
                true
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Printer offline");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}
