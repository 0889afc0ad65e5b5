// src/utils/config.rs
use std::path::Path;

use config::{Config as ConfigLib, ConfigError, Environment, File};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::utils::error::{Result, ServiceError};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10_485_760; // 10MB

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<String>,
    pub file_prefix: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8000,
                workers: None,
            },
            limits: LimitsConfig {
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            logging: LoggingConfig {
                level: "info".into(),
                directory: None,
                file_prefix: "ml-verify.log".into(),
            },
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::load("config")
    }

    /// Loads `<dir>/default` and `<dir>/local` (both optional) under the
    /// built-in defaults and over them the `ML_VERIFY_*` environment.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let default_file = dir.join("default");
        let local_file = dir.join("local");

        let config = ConfigLib::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("limits.max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES as u64)?
            .set_default("logging.level", "info")?
            .set_default("logging.file_prefix", "ml-verify.log")?

            // Load from config files
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&local_file.to_string_lossy()).required(false))

            // Override with environment variables (e.g., ML_VERIFY_SERVER__PORT)
            .add_source(
                Environment::with_prefix("ML_VERIFY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )

            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServiceError::Config("Invalid port number".into()));
        }
        if self.server.workers == Some(0) {
            return Err(ServiceError::Config("workers must be greater than 0".into()));
        }

        if self.limits.max_upload_bytes == 0 {
            return Err(ServiceError::Config("max_upload_bytes must be greater than 0".into()));
        }

        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            ServiceError::Config(format!("Invalid log level '{}': {}", self.logging.level, e))
        })?;

        Ok(())
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.server.host.as_str(), self.server.port)
    }
}

impl From<ConfigError> for ServiceError {
    fn from(error: ConfigError) -> Self {
        ServiceError::Config(error.to_string())
    }
}
