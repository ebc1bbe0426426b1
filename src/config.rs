//! Configuration for mpdlink
//!
//! Centralized connection configuration with sensible defaults, plus parsing
//! of the `[password@]host[:port]` address form used by MPD tooling.

use std::fmt;
use std::path::PathBuf;

use crate::error::{MpdError, Result};

/// Default MPD TCP port
pub const DEFAULT_PORT: u16 = 6600;

/// Default MPD host
pub const DEFAULT_HOST: &str = "localhost";

/// Where the server lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// TCP host and port
    Tcp { host: String, port: u16 },

    /// Local (Unix domain) socket path
    Local(PathBuf),
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::Tcp {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tcp { host, port } => write!(f, "{}:{}", host, port),
            Endpoint::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Main configuration for a client instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Server Address
    // -------------------------------------------------------------------------
    /// TCP address or local socket path
    pub endpoint: Endpoint,

    /// Password sent right after the greeting, if any
    pub password: Option<String>,

    // -------------------------------------------------------------------------
    // Socket Timeouts
    // -------------------------------------------------------------------------
    /// Connect timeout (milliseconds, 0 = OS default)
    pub connect_timeout_ms: u64,

    /// Read timeout (milliseconds, 0 = block forever)
    ///
    /// `idle` blocks until the server reports a change, so a non-zero value
    /// bounds how long an idle wait may last.
    pub read_timeout_ms: u64,

    /// Write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            password: None,
            connect_timeout_ms: 5000,
            read_timeout_ms: 0,
            write_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse an address of the form `[password@]host[:port]`
    ///
    /// - missing password: none is sent
    /// - missing port: 6600
    /// - missing host: `localhost`
    /// - a host containing `/` names a local socket; the port is ignored
    pub fn from_address(address: &str) -> Result<Self> {
        let address = address.trim();

        let (password, rest) = match address.rsplit_once('@') {
            Some((password, rest)) => (Some(password.to_string()), rest),
            None => (None, address),
        };

        let endpoint = if rest.contains('/') {
            Endpoint::Local(PathBuf::from(rest))
        } else {
            let (host, port) = match rest.rsplit_once(':') {
                Some((host, port)) => {
                    let port = port.parse::<u16>().map_err(|e| {
                        MpdError::Config(format!("Invalid port '{}': {}", port, e))
                    })?;
                    (host, port)
                }
                None => (rest, DEFAULT_PORT),
            };

            let host = if host.is_empty() { DEFAULT_HOST } else { host };
            Endpoint::Tcp {
                host: host.to_string(),
                port,
            }
        };

        Ok(Self {
            endpoint,
            password: password.filter(|p| !p.is_empty()),
            ..Self::default()
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Connect over TCP to host:port
    pub fn tcp(mut self, host: impl Into<String>, port: u16) -> Self {
        self.config.endpoint = Endpoint::Tcp {
            host: host.into(),
            port,
        };
        self
    }

    /// Connect over a local socket
    pub fn local(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.endpoint = Endpoint::Local(path.into());
        self
    }

    /// Set the password used during the handshake
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
