use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INSERT_CHUNK_SIZE: usize = 500;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub database: Option<DatabaseConfig>,
    pub import: Option<ImportConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:5173".to_string()],
            }),
            server: Some(ServerConfig::default()),
            database: None,
            import: Some(ImportConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DatabaseConfig {
    /// Overrides the platform data directory location
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImportConfig {
    #[serde(default = "default_insert_chunk_size")]
    pub insert_chunk_size: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            insert_chunk_size: DEFAULT_INSERT_CHUNK_SIZE,
        }
    }
}

fn default_insert_chunk_size() -> usize {
    DEFAULT_INSERT_CHUNK_SIZE
}

const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[cors]
allowed_origins = ["http://localhost:5173"]

[database]
# path = "/custom/path/ringdesk.db"

[import]
# Contacts written per transaction during an import
insert_chunk_size = 500
"#;

impl ApiConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();
        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    /// Reads the config at `config_path`, writing the commented defaults first
    /// when the file does not exist yet.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.to_path_buf()))
            .build()?;

        builder.try_deserialize()
    }

    pub fn server_address(&self) -> (String, u16) {
        let server = self.server.clone().unwrap_or_default();
        (server.host, server.port)
    }

    pub fn insert_chunk_size(&self) -> usize {
        self.import
            .as_ref()
            .map(|import| import.insert_chunk_size)
            .unwrap_or(DEFAULT_INSERT_CHUNK_SIZE)
            .max(1)
    }

    pub fn database_path(&self) -> Option<PathBuf> {
        self.database.as_ref().and_then(|db| db.path.clone())
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("ringdesk").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ringdesk").join("api.toml");

        let config = ApiConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.server_address(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(config.insert_chunk_size(), 500);
        assert_eq!(config.database_path(), None);
        assert_eq!(
            config.cors.unwrap().allowed_origins,
            vec!["http://localhost:5173".to_string()]
        );
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.toml");
        std::fs::write(
            &path,
            "[database]\npath = \"/tmp/leads.db\"\n\n[import]\ninsert_chunk_size = 0\n",
        )
        .unwrap();

        let config = ApiConfig::load_from(&path).unwrap();

        assert_eq!(config.server_address(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(config.database_path(), Some(PathBuf::from("/tmp/leads.db")));
        assert_eq!(config.insert_chunk_size(), 1);
        assert!(config.cors.is_none());
    }
}
