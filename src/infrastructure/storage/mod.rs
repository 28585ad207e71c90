//! YAML file storage for the bot configuration

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::application::errors::StorageError;
use crate::domain::entities::BotConfig;
use crate::domain::traits::ConfigStore;

pub const DEFAULT_CONFIG_PATH: &str = "bot_config.yaml";

/// Stores the config as a single YAML document
pub struct YamlConfigStore {
    path: PathBuf,
}

impl YamlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<Option<BotConfig>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        // An empty document is what an aborted save leaves behind
        if content.trim().is_empty() {
            return Ok(None);
        }

        let config = serde_yaml::from_str(&content)
            .map_err(|e| StorageError::Serialization(format!("Failed to parse config: {}", e)))?;
        Ok(Some(config))
    }

    fn save(&self, config: &BotConfig) -> Result<(), StorageError> {
        let content = serde_yaml::to_string(config)
            .map_err(|e| StorageError::Serialization(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&self.path, content)?;
        tracing::info!("Saved config to {}", self.path.display());
        Ok(())
    }
}
