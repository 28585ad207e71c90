//! Launch-time overrides from the environment

use crate::domain::entities::BotConfig;

pub const TOKEN_ENV: &str = "DISCORD_TOKEN";
pub const PREFIX_ENV: &str = "BOT_PREFIX";

/// Values that take precedence over the saved config when the bot starts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub token: Option<String>,
    pub prefix: Option<String>,
}

impl Overrides {
    pub fn load_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            token: get(TOKEN_ENV),
            prefix: get(PREFIX_ENV),
        }
    }

    pub fn apply(&self, config: &BotConfig) -> BotConfig {
        let mut config = config.clone();
        if let Some(token) = &self.token {
            tracing::info!("Using token from {}", TOKEN_ENV);
            config.token = token.trim().to_string();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        config
    }
}
