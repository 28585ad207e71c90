use crate::application::errors::StorageError;
use crate::domain::entities::BotConfig;

/// ConfigStore trait - abstraction for config persistence
pub trait ConfigStore {
    /// `Ok(None)` when no configuration has been saved yet.
    fn load(&self) -> Result<Option<BotConfig>, StorageError>;

    fn save(&self, config: &BotConfig) -> Result<(), StorageError>;
}
