use crate::Result;

use std::env;

use anyhow::Context;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "pilot-payflowpro.paypal.com";

const DEFAULT_PORT: u16 = 443;
const DEFAULT_TIMEOUT_SECS: u64 = 45;

const HOST_VAR: &str = "PAYFLOW_HOST";
const PORT_VAR: &str = "PAYFLOW_PORT";
const TIMEOUT_VAR: &str = "PAYFLOW_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Couldn't parse {0}: {1}")]
    Parse(&'static str, String),
}

/// Settings for reaching the gateway host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConnectionConfig {
    pub fn new(host: String, port: u16, timeout_secs: u64) -> Self {
        Self {
            host,
            port,
            timeout_secs,
        }
    }

    /// Reads connection settings from the environment.
    ///
    /// `PAYFLOW_HOST` unset means no explicit connection was configured, and
    /// `Ok(None)` is returned. Port and timeout fall back to the gateway
    /// defaults when their variables are unset.
    pub fn from_env() -> Result<Option<Self>> {
        let host = match env::var(HOST_VAR) {
            Ok(host) => host,
            Err(_) => return Ok(None),
        };

        let port = match env::var(PORT_VAR) {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| ConnectionError::Parse(PORT_VAR, port.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        let timeout_secs = match env::var(TIMEOUT_VAR) {
            Ok(timeout) => timeout
                .parse::<u64>()
                .with_context(|| ConnectionError::Parse(TIMEOUT_VAR, timeout.clone()))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        return Ok(Some(Self::new(host, port, timeout_secs)));
    }
}
