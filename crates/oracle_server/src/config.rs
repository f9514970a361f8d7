//! Server configuration from the environment.

use derive_getters::Getters;
use derive_more::{Display, Error};
use oracle_tictactoe::Algorithm;
use tracing::{debug, info, instrument};

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;
/// Host used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

const PORT_VAR: &str = "PORT";
const HOST_VAR: &str = "HOST";
const ALGORITHM_VAR: &str = "ORACLE_ALGORITHM";

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ServerConfig {
    /// Interface to bind.
    host: String,
    /// TCP port to bind.
    port: u16,
    /// Search used when a request does not pick one.
    algorithm: Algorithm,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST.to_string(), DEFAULT_PORT, Algorithm::default())
    }
}

impl ServerConfig {
    /// Creates a configuration from explicit values.
    pub fn new(host: String, port: u16, algorithm: Algorithm) -> Self {
        Self {
            host,
            port,
            algorithm,
        }
    }

    /// Reads `PORT`, `HOST` and `ORACLE_ALGORITHM` from the process environment.
    #[instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup, falling back to defaults
    /// for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|e| {
                ConfigError::new(format!("Invalid {PORT_VAR} {port:?}: {e}"))
            })?;
        }

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(algorithm) = lookup(ALGORITHM_VAR) {
            config.algorithm = algorithm.trim().parse().map_err(|_| {
                ConfigError::new(format!(
                    "Invalid {ALGORITHM_VAR} {algorithm:?}: expected \"minimax\" or \"alpha-beta\""
                ))
            })?;
        }

        debug!(?config, "Configuration resolved");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        algorithm: Option<Algorithm>,
    ) -> Self {
        if let Some(host) = host {
            info!(%host, "Overriding host");
            self.host = host;
        }
        if let Some(port) = port {
            info!(port, "Overriding port");
            self.port = port;
        }
        if let Some(algorithm) = algorithm {
            info!(%algorithm, "Overriding algorithm");
            self.algorithm = algorithm;
        }
        self
    }

    /// Address string for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
