/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use songscope_core::query::PageLimits;
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given, if it exists
pub const DEFAULT_CONFIG_FILE: &str = "songscope.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_query")]
    pub query: QuerySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Pre-built dashboard to serve outside `/api`
    #[serde(default)]
    pub web_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Page sizes used when a request omits or mangles `limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuerySettings {
    #[serde(default = "default_song_page_size")]
    pub song_page_size: u64,

    #[serde(default = "default_filter_page_size")]
    pub filter_page_size: u64,

    #[serde(default = "default_artist_page_size")]
    pub artist_page_size: u64,

    /// Upper bound for any requested `limit`
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl QuerySettings {
    pub fn songs(&self) -> PageLimits {
        PageLimits::new(self.song_page_size, self.max_page_size)
    }

    pub fn filter(&self) -> PageLimits {
        PageLimits::new(self.filter_page_size, self.max_page_size)
    }

    pub fn artists(&self) -> PageLimits {
        PageLimits::new(self.artist_page_size, self.max_page_size)
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `./songscope.toml` is read if
    /// present. `SONGSCOPE_<SECTION>__<KEY>` variables override both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (e.g. SONGSCOPE_SERVER__PORT)
        settings = settings.add_source(
            config::Environment::with_prefix("SONGSCOPE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set SONGSCOPE_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config("Port must not be 0".to_string()));
        }

        if self.storage.max_connections == 0 {
            return Err(ServerError::Config(
                "storage.max_connections must be at least 1".to_string(),
            ));
        }

        let query = &self.query;
        let sizes = [
            ("song_page_size", query.song_page_size),
            ("filter_page_size", query.filter_page_size),
            ("artist_page_size", query.artist_page_size),
            ("max_page_size", query.max_page_size),
        ];
        for (name, size) in sizes {
            if size == 0 {
                return Err(ServerError::Config(format!(
                    "query.{name} must be at least 1"
                )));
            }
            if size > query.max_page_size {
                return Err(ServerError::Config(format!(
                    "query.{name} ({size}) exceeds query.max_page_size ({})",
                    query.max_page_size
                )));
            }
        }

        if let Some(web_dir) = &self.server.web_dir {
            if !web_dir.is_dir() {
                return Err(ServerError::Config(format!(
                    "Web directory not found at {:?}",
                    web_dir
                )));
            }
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        web_dir: None,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/songscope.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_query() -> QuerySettings {
    QuerySettings {
        song_page_size: default_song_page_size(),
        filter_page_size: default_filter_page_size(),
        artist_page_size: default_artist_page_size(),
        max_page_size: default_max_page_size(),
    }
}

fn default_song_page_size() -> u64 {
    50
}

fn default_filter_page_size() -> u64 {
    10
}

fn default_artist_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            query: default_query(),
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        default_query()
    }
}
