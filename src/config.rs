//! Configuration types for pdf-thumbnailer

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use utoipa::ToSchema;

use crate::{Error, Result};

/// Top-level configuration for the service
///
/// Works out of the box with `Config::default()` (in-memory storage, local
/// bind address), or can be deserialized from JSON / built from the
/// environment with [`Config::from_env`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// Document storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// PDF fetching and thumbnail rendering settings
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Outcome notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// HTTP API settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Document storage configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageConfig {
    /// Path to the SQLite database file (None = ephemeral in-memory storage)
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub database_path: Option<PathBuf>,

    /// Retain the original PDF bytes alongside the thumbnail (default: false)
    #[serde(default)]
    pub keep_pdf: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            keep_pdf: false,
        }
    }
}

/// PDF fetching and thumbnail rendering configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ConverterConfig {
    /// Maximum time to wait for the source url to deliver the PDF (default: 30s)
    #[serde(default = "default_fetch_timeout", with = "duration_serde")]
    #[schema(value_type = u64)]
    pub fetch_timeout: Duration,

    /// JPEG quality for rendered thumbnails, 1-100 (default: 70)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Rasterization resolution in DPI (default: 36, roughly page-preview size)
    #[serde(default = "default_render_dpi")]
    pub render_dpi: u32,

    /// Explicit path to the ghostscript binary (default: discovered from PATH)
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub ghostscript_path: Option<PathBuf>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: default_fetch_timeout(),
            jpeg_quality: default_jpeg_quality(),
            render_dpi: default_render_dpi(),
            ghostscript_path: None,
        }
    }
}

/// Outcome notification configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationConfig {
    /// Maximum time to wait for a webhook endpoint to respond (default: 30s)
    #[serde(default = "default_webhook_timeout", with = "duration_serde")]
    #[schema(value_type = u64)]
    pub webhook_timeout: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            webhook_timeout: default_webhook_timeout(),
        }
    }
}

/// HTTP API configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ServerConfig {
    /// Address the API server binds to (default: 127.0.0.1:3000)
    #[serde(default = "default_bind_address")]
    #[schema(value_type = String)]
    pub bind_address: SocketAddr,

    /// Enable CORS (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins ("*" or empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Serve interactive Swagger UI at /swagger-ui (default: false)
    #[serde(default)]
    pub swagger_ui: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
            swagger_ui: false,
        }
    }
}

impl Config {
    /// Build a configuration from the process environment.
    ///
    /// Reads `PORT` (required) and `DB_PATH` (required; the special value
    /// `:memory:` selects ephemeral in-memory storage). A `.env` file in the
    /// working directory is honored when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT").map_err(|_| Error::Config {
            message: "the PORT environment variable must be defined".to_string(),
            key: Some("PORT".to_string()),
        })?;
        let port: u16 = port.parse().map_err(|_| Error::Config {
            message: format!("PORT must be a valid port number, got [{}]", port),
            key: Some("PORT".to_string()),
        })?;

        let db_path = std::env::var("DB_PATH").map_err(|_| Error::Config {
            message: "the DB_PATH environment variable must be defined".to_string(),
            key: Some("DB_PATH".to_string()),
        })?;

        let database_path = if db_path == ":memory:" {
            None
        } else {
            Some(PathBuf::from(db_path))
        };

        Ok(Self {
            storage: StorageConfig {
                database_path,
                ..Default::default()
            },
            server: ServerConfig {
                bind_address: SocketAddr::from(([127, 0, 0, 1], port)),
                ..Default::default()
            },
            ..Default::default()
        })
    }
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_jpeg_quality() -> u8 {
    70
}

fn default_render_dpi() -> u32 {
    36
}

fn default_webhook_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_true() -> bool {
    true
}

// Duration serialization helper (seconds as u64)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
