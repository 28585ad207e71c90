use crate::application::errors::LaunchError;
use crate::domain::entities::BotConfig;

/// Launcher trait - runs a bot built from a config until it stops
pub trait Launcher {
    fn launch(&self, config: &BotConfig) -> Result<(), LaunchError>;
}
