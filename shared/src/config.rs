//! Service configuration.
//!
//! Each service reads its settings from environment variables under its own
//! prefix, e.g. `SUBTRACTION_HOST`, `SUBTRACTION_PORT`,
//! `SUBTRACTION_LOG_FORMAT`.

use crate::logging::LogFormat;
use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server configuration for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// Output format of the tracing subscriber.
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// Default configuration listening on `default_port`.
    #[must_use]
    pub fn with_defaults(default_port: u16) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: default_port,
            log_format: LogFormat::default(),
        }
    }

    /// Loads the configuration from `<PREFIX>_HOST`, `<PREFIX>_PORT` and
    /// `<PREFIX>_LOG_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns an error if the port or log format is set but cannot be parsed.
    pub fn from_env(prefix: &str, default_port: u16) -> Result<Self> {
        Self::from_lookup(prefix, default_port, |key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with a custom variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if the port or log format is set but cannot be parsed.
    pub fn from_lookup(
        prefix: &str,
        default_port: u16,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let host = lookup(&format!("{prefix}_HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port_key = format!("{prefix}_PORT");
        let port = lookup(&port_key)
            .map(|p| p.parse::<u16>())
            .transpose()
            .with_context(|| format!("{port_key} must be a valid port number"))?
            .unwrap_or(default_port);

        let format_key = format!("{prefix}_LOG_FORMAT");
        let log_format = lookup(&format_key)
            .map(|f| f.parse::<LogFormat>())
            .transpose()
            .with_context(|| format!("{format_key} is invalid"))?
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            log_format,
        })
    }

    /// Returns the socket address for binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the host and port do not form a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }
}
