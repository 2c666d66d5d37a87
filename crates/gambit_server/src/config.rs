//! Server configuration: an optional TOML file with serde defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "GAMBIT_SERVER_CONFIG";
const DEFAULT_PATH: &str = "gambit_server.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Engine search depth per reply
    pub depth: u8,
    /// Engine move-time budget in milliseconds
    pub move_time_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            depth: 3,
            move_time_ms: 2000,
        }
    }
}

/// Loads the config file named by `GAMBIT_SERVER_CONFIG`, falling back to
/// `gambit_server.toml`. A missing file yields the defaults; a present
/// but malformed file is an error, not a silent default.
pub fn load() -> anyhow::Result<ServerConfig> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_PATH.to_string());
    load_from(Path::new(&path))
}

pub fn load_from(path: &Path) -> anyhow::Result<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }
    let text = std::fs::read_to_string(path)?;
    let config = toml::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:5000");
        assert_eq!(config.depth, 3);
        assert_eq!(config.move_time_ms, 2000);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: ServerConfig = toml::from_str("depth = 5").unwrap();
        assert_eq!(config.depth, 5);
        assert_eq!(config.bind, "127.0.0.1:5000");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_from(Path::new("/definitely/not/here.toml")).unwrap();
        assert_eq!(config.depth, ServerConfig::default().depth);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(toml::from_str::<ServerConfig>("depth = \"many\"").is_err());
    }
}
