// src/core/config_manager.rs
//! Environment-driven configuration, read once at startup

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub const API_URL_VAR: &str = "JOBMATCH_API_URL";
pub const STATE_PATH_VAR: &str = "JOBMATCH_STATE_PATH";
pub const PORT_VAR: &str = "JOBMATCH_PORT";
pub const ADDRESS_VAR: &str = "JOBMATCH_ADDRESS";

const DEFAULT_STATE_PATH: &str = ".jobmatch/session.json";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ADDRESS: &str = "127.0.0.1";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub client: ClientConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Remote backend base URL. `None` selects mock mode.
    pub api_url: Option<String>,
    pub state_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

impl ConfigManager {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; `load` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let state_path = lookup(STATE_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH));

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} must be a valid port number", PORT_VAR))?,
            None => DEFAULT_PORT,
        };

        let address = lookup(ADDRESS_VAR)
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        match &api_url {
            Some(url) => info!("API mode: remote ({})", url),
            None => info!("API mode: mock ({} not set)", API_URL_VAR),
        }

        Ok(Self {
            client: ClientConfig {
                api_url,
                state_path,
            },
            server: ServerConfig { address, port },
        })
    }

    pub fn is_mock_mode(&self) -> bool {
        self.client.api_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConfigManager> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigManager::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_url_selects_mock_mode() {
        let config = load(&[]).unwrap();
        assert!(config.is_mock_mode());
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.client.state_path, PathBuf::from(".jobmatch/session.json"));

        let blank = load(&[(API_URL_VAR, "   ")]).unwrap();
        assert!(blank.is_mock_mode());
    }

    #[test]
    fn test_url_selects_remote_mode() {
        let config = load(&[(API_URL_VAR, "http://localhost:8000/api/")]).unwrap();
        assert!(!config.is_mock_mode());
        assert_eq!(config.client.api_url.as_deref(), Some("http://localhost:8000/api"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(load(&[(PORT_VAR, "eighty")]).is_err());
        assert_eq!(load(&[(PORT_VAR, "9100")]).unwrap().server.port, 9100);
    }
}
