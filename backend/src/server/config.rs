//! Server settings loaded via OrthoConfig.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while resolving the configured bind address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerSettingsError {
    /// The host is not a literal IP address.
    #[error("invalid bind host {host:?}: {message}")]
    InvalidHost { host: String, message: String },
}

/// Configuration values controlling the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve the socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerSettingsError> {
        let host = self.host();
        let ip: IpAddr = host
            .parse()
            .map_err(|err: std::net::AddrParseError| ServerSettingsError::InvalidHost {
                host: host.to_owned(),
                message: err.to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
