use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the backing JSON file
pub const STORAGE_PATH_ENV: &str = "STORAGE_JSON_FILE_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub json_file_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Environment variables with prefix "CATALOG_", e.g. CATALOG_SERVER__PORT
        config = config.add_source(
            config::Environment::with_prefix("CATALOG")
                .separator("__")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Path of the backing JSON file, from config or `STORAGE_JSON_FILE_PATH`
    pub fn storage_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.storage.json_file_path {
            return Ok(PathBuf::from(path));
        }

        match std::env::var(STORAGE_PATH_ENV) {
            Ok(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => anyhow::bail!(
                "no product file configured: set {} or storage.json_file_path",
                STORAGE_PATH_ENV
            ),
        }
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
