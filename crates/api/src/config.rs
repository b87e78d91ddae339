//! Process configuration, read from the environment.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

pub const LISTEN_ADDR_VAR: &str = "PRODUCTS_LISTEN_ADDR";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub listen_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw.parse().map_err(|source| ConfigError::InvalidAddr {
            var: LISTEN_ADDR_VAR,
            value: raw.clone(),
            source,
        })?;
        Ok(Self { listen_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn reads_listen_addr() {
        let cfg = ApiConfig::from_lookup(|k| {
            (k == LISTEN_ADDR_VAR).then(|| "127.0.0.1:9000".to_string())
        })
        .unwrap();
        assert_eq!(cfg.listen_addr.port(), 9000);
    }

    #[test]
    fn rejects_garbage_addr() {
        let err = ApiConfig::from_lookup(|_| Some("not-an-addr".to_string())).unwrap_err();
        assert!(err.to_string().contains(LISTEN_ADDR_VAR));
        assert!(err.to_string().contains("not-an-addr"));
    }
}
