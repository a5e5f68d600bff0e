//! Process configuration
//!
//! All settings come from environment variables (with `.env` support via
//! `dotenv` in `setup_environment`), are loaded once at startup, and are
//! passed to the services explicitly - there is no ambient global state.
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 5000 | front-door listen port |
//! | ERP_URL | (required) | inventory API base URL |
//! | API_KEY | (required) | inventory API basic-auth user |
//! | API_SECRET | (required) | inventory API basic-auth secret |
//! | PRINTER_HOST | (required) | label printer host, all variants |
//! | PRINTER_PORT | 9100 | raw-socket printer port |
//! | PRINTER_HOST_LARGE | PRINTER_HOST | routing override for large labels |
//! | PRINTER_HOST_SMALL | PRINTER_HOST | routing override for small labels |
//! | PRINTER_HOST_SCREW | PRINTER_HOST | routing override for fastener labels |
//! | FETCH_TIMEOUT_MS | 10000 | inventory API request timeout |
//! | PRINT_TIMEOUT_MS | 5000 | printer send timeout per job |
//! | REQUEST_TIMEOUT_MS | 30000 | front-door request timeout |

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::labels::LabelVariant;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable without a usable default was not set
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Server configuration - every tunable of the bridge process
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Front-door request timeout
    pub request_timeout: Duration,
    /// Inventory API settings
    pub erp: ErpConfig,
    /// Printer routing settings
    pub printers: PrinterRouting,
}

/// Inventory API section of the configuration
#[derive(Debug, Clone)]
pub struct ErpConfig {
    /// Base URL of the inventory API, scheme included
    pub base_url: String,
    /// Basic-auth key
    pub api_key: String,
    /// Basic-auth secret
    pub api_secret: String,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Printer endpoint routing per label variant
///
/// In the single-printer configuration only `default_host` is set and all
/// variants share it; per-variant hosts override the default individually.
#[derive(Debug, Clone)]
pub struct PrinterRouting {
    /// Fallback host for every variant
    pub default_host: String,
    /// Shared raw-socket port
    pub port: u16,
    /// Override for large labels
    pub large_host: Option<String>,
    /// Override for small labels
    pub small_host: Option<String>,
    /// Override for fastener labels
    pub screw_host: Option<String>,
    /// Send timeout per print job (bounds connect, write and flush)
    pub send_timeout: Duration,
}

/// One resolved printer address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterEndpoint {
    /// Host name or IP
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl fmt::Display for PrinterEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl PrinterRouting {
    /// Resolve the target endpoint for a label variant (fixed mapping)
    pub fn endpoint_for(&self, variant: LabelVariant) -> PrinterEndpoint {
        let host = match variant {
            LabelVariant::Large => self.large_host.as_ref(),
            LabelVariant::Small => self.small_host.as_ref(),
            LabelVariant::Screw => self.screw_host.as_ref(),
        }
        .unwrap_or(&self.default_host)
        .clone();

        PrinterEndpoint {
            host,
            port: self.port,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Fails fast with a descriptive error when a required variable is
    /// absent; everything else falls back to its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            http_port: env_parsed("HTTP_PORT", 5000),
            request_timeout: Duration::from_millis(env_parsed("REQUEST_TIMEOUT_MS", 30_000)),
            erp: ErpConfig {
                base_url: required("ERP_URL")?,
                api_key: required("API_KEY")?,
                api_secret: required("API_SECRET")?,
                timeout: Duration::from_millis(env_parsed("FETCH_TIMEOUT_MS", 10_000)),
            },
            printers: PrinterRouting {
                default_host: required("PRINTER_HOST")?,
                port: env_parsed("PRINTER_PORT", 9100),
                large_host: std::env::var("PRINTER_HOST_LARGE").ok(),
                small_host: std::env::var("PRINTER_HOST_SMALL").ok(),
                screw_host: std::env::var("PRINTER_HOST_SCREW").ok(),
                send_timeout: Duration::from_millis(env_parsed("PRINT_TIMEOUT_MS", 5_000)),
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routing() -> PrinterRouting {
        PrinterRouting {
            default_host: "printer.local".to_string(),
            port: 9100,
            large_host: None,
            small_host: None,
            screw_host: Some("screw-printer.local".to_string()),
            send_timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_endpoint_falls_back_to_default_host() {
        let routing = routing();

        for variant in [LabelVariant::Large, LabelVariant::Small] {
            let endpoint = routing.endpoint_for(variant);
            assert_eq!(endpoint.host, "printer.local");
            assert_eq!(endpoint.port, 9100);
        }
    }

    #[test]
    fn test_endpoint_honors_variant_override() {
        let endpoint = routing().endpoint_for(LabelVariant::Screw);
        assert_eq!(endpoint.host, "screw-printer.local");
    }

    #[test]
    fn test_endpoint_display() {
        let endpoint = routing().endpoint_for(LabelVariant::Large);
        assert_eq!(endpoint.to_string(), "printer.local:9100");
    }
}
