/// Configuration service - loads config from a JSON file or environment variables
use crate::constants::*;
use crate::error::ContactflowError;
use crate::models::{ContactflowConfig, EnvelopeConfig, TransportAuth, TransportConfig};
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_config(&self) -> Result<ContactflowConfig, ContactflowError>;
}

/// Environment variable-based configuration provider
pub struct EnvConfigProvider {
    config: ContactflowConfig,
}

impl EnvConfigProvider {
    pub fn new() -> Result<Self, ContactflowError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactflowError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            var(key).ok_or_else(|| ContactflowError::Config(format!("Missing {} env var", key)))
        };

        let port = var(ENV_SMTP_PORT)
            .map(|p| {
                p.trim().parse::<u16>().map_err(|e| {
                    ContactflowError::Config(format!("Invalid {}: {}", ENV_SMTP_PORT, e))
                })
            })
            .transpose()?;

        let config = ContactflowConfig {
            transport: TransportConfig {
                service: var(ENV_SMTP_SERVICE),
                host: var(ENV_SMTP_HOST),
                port,
                auth: TransportAuth {
                    user: required(ENV_SMTP_USER)?,
                    pass: var(ENV_SMTP_PASS),
                    access_token: var(ENV_SMTP_ACCESS_TOKEN),
                },
            },
            envelope: EnvelopeConfig {
                sender: required(ENV_MAIL_SENDER)?,
                recipient: required(ENV_MAIL_RECIPIENT)?,
                subject: var(ENV_MAIL_SUBJECT).unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            },
        };

        config
            .validate()
            .map_err(|e| ContactflowError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!("Configuration loaded from environment");

        Ok(Self { config })
    }
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn get_config(&self) -> Result<ContactflowConfig, ContactflowError> {
        // Configuration is immutable during Lambda lifetime
        Ok(self.config.clone())
    }
}

/// JSON file-based configuration provider
pub struct FileConfigProvider {
    config: ContactflowConfig,
}

impl FileConfigProvider {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ContactflowError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ContactflowError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: ContactflowConfig = serde_json::from_str(&raw).map_err(|e| {
            ContactflowError::Config(format!("Invalid config JSON in {}: {}", path.display(), e))
        })?;

        config
            .validate()
            .map_err(|e| ContactflowError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!(path = %path.display(), "Configuration loaded from file");

        Ok(Self { config })
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    async fn get_config(&self) -> Result<ContactflowConfig, ContactflowError> {
        Ok(self.config.clone())
    }
}

/// Picks the file provider when `CONTACTFLOW_CONFIG` is set, else the environment
pub fn config_provider() -> Result<Box<dyn ConfigProvider>, ContactflowError> {
    match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) if !path.trim().is_empty() => Ok(Box::new(FileConfigProvider::new(path)?)),
        _ => Ok(Box::new(EnvConfigProvider::new()?)),
    }
}
