//! Configuration for spamlens

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SpamError};

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Classifier model configuration
    #[serde(default)]
    pub model: ModelConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1:3000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Model artifact location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Path to the serialized classifier
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/spam_model.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Development defaults: local listener, bundled demo model
    pub fn development() -> Self {
        Self {
            server: ServerConfig::default(),
            model: ModelConfig::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .listen_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| {
                SpamError::Config(format!(
                    "Invalid listen address '{}': {}",
                    self.server.listen_addr, e
                ))
            })?;

        if self.model.path.as_os_str().is_empty() {
            return Err(SpamError::Config("Model path is empty".to_string()));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.model.path, PathBuf::from("models/spam_model.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
listen_addr = "0.0.0.0:8080"

[model]
path = "/var/lib/spamlens/model.json"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.model.path, PathBuf::from("/var/lib/spamlens/model.json"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.model.path, PathBuf::from("models/spam_model.json"));
    }

    #[test]
    fn test_invalid_listen_addr() {
        let mut config = AppConfig::default();
        config.server.listen_addr = "not-an-address".to_string();
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nlisten_addr = \"127.0.0.1:9000\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_from_missing_file() {
        let result = AppConfig::from_file(Path::new("/nonexistent/spamlens.toml"));
        assert!(matches!(result, Err(SpamError::Config(_))));
    }
}
