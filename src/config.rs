use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Which of the two services a configuration is being loaded for.
///
/// Each service has its own config file, environment prefix and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Backend,
    Inference,
}

impl ServiceKind {
    pub fn title(self) -> &'static str {
        match self {
            ServiceKind::Backend => "Multi-Stack Starter Kit - FastAPI Backend",
            ServiceKind::Inference => "Multi-Stack Starter Kit - PyTorch AI Backend",
        }
    }

    /// Prefix for environment overrides, e.g. `BACKEND_SERVER_PORT`.
    pub fn env_prefix(self) -> &'static str {
        match self {
            ServiceKind::Backend => "BACKEND",
            ServiceKind::Inference => "INFERENCE",
        }
    }

    /// Environment variable naming the config file.
    pub fn config_path_var(self) -> &'static str {
        match self {
            ServiceKind::Backend => "BACKEND_CONFIG",
            ServiceKind::Inference => "INFERENCE_CONFIG",
        }
    }

    pub fn default_config_path(self) -> &'static str {
        match self {
            ServiceKind::Backend => "backend.toml",
            ServiceKind::Inference => "inference.toml",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::Backend => 8000,
            ServiceKind::Inference => 8001,
        }
    }

    /// The basic backend ships with a permissive CORS policy, the inference
    /// backend with none.
    pub fn cors_by_default(self) -> bool {
        matches!(self, ServiceKind::Backend)
    }
}

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub cors: CorsSection,
    pub model: ModelSection,
}

impl AppConfig {
    /// Load configuration for `service` from disk and environment.
    pub fn load(service: ServiceKind) -> Result<Self> {
        let config_path = env::var(service.config_path_var())
            .unwrap_or_else(|_| service.default_config_path().to_string());

        Self::load_from(service, &config_path)
    }

    /// Load configuration from an explicit file path. A missing file falls
    /// back to the service defaults.
    pub fn load_from(service: ServiceKind, config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();

        let mut builder = config::Config::builder()
            .set_default("server.port", i64::from(service.default_port()))?
            .set_default("cors.enabled", service.cors_by_default())?;

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(service.env_prefix())
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Socket address string the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

/// Cross-origin policy switch. When enabled, every origin, method and header
/// is allowed and credentials are permitted.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CorsSection {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ModelSection {
    /// Seed for weight initialisation. Unset means a fresh random model on
    /// every start.
    pub seed: Option<u64>,
}
