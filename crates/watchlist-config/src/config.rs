use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the client points when nothing overrides it.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub url: String,
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// A missing file means defaults, not an error.
    pub fn load_or_default(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(server) = &self.server {
            if server.url.trim().is_empty() {
                return Err(anyhow::anyhow!("server.url cannot be empty"));
            }
            if !server.url.starts_with("http://") && !server.url.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "server.url must start with http:// or https://: {}",
                    server.url
                ));
            }
        }
        Ok(())
    }

    /// Resolve the base URL the client talks to: an explicit override
    /// beats the config file, which beats the fixed default.
    pub fn resolve_server_url(&self, override_url: Option<&str>) -> String {
        if let Some(url) = override_url {
            return url.to_string();
        }
        self.server
            .as_ref()
            .map(|server| server.url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }
}
