//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for the steps server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP listen address
    pub addr: SocketAddr,

    /// Base URL of a remote engine consulted before the local one
    pub backend_url: Option<String>,

    /// Upper bound on one remote round trip
    pub remote_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            backend_url: None,
            remote_timeout: Duration::from_millis(2000),
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup("ALGOVIZ_ADDR") {
            config.addr = value.parse().map_err(|e: std::net::AddrParseError| Error::Config {
                name: "ALGOVIZ_ADDR",
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }

        config.backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        if let Some(value) = lookup("ALGOVIZ_REMOTE_TIMEOUT_MS") {
            let millis: u64 = value.parse().map_err(|e: std::num::ParseIntError| Error::Config {
                name: "ALGOVIZ_REMOTE_TIMEOUT_MS",
                value: value.clone(),
                reason: e.to_string(),
            })?;
            config.remote_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// Override the listen port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.port(), 3000);
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("ALGOVIZ_ADDR", "127.0.0.1:8081"),
            ("BACKEND_URL", "http://engine:8000//"),
            ("ALGOVIZ_REMOTE_TIMEOUT_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:8081".parse().unwrap());
        assert_eq!(config.backend_url.as_deref(), Some("http://engine:8000"));
        assert_eq!(config.remote_timeout, Duration::from_millis(250));
    }

    #[test]
    fn blank_backend_means_no_delegate() {
        let config = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "  ")])).unwrap();
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = ServerConfig::from_lookup(lookup(&[("ALGOVIZ_ADDR", "nowhere")])).unwrap_err();
        assert!(err.to_string().contains("ALGOVIZ_ADDR"));

        let err = ServerConfig::from_lookup(lookup(&[("ALGOVIZ_REMOTE_TIMEOUT_MS", "-1")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config { name: "ALGOVIZ_REMOTE_TIMEOUT_MS", .. }));
    }

    #[test]
    fn port_override() {
        let config = ServerConfig::default().with_port(9999);
        assert_eq!(config.addr.port(), 9999);
    }
}
