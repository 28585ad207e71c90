//! Domain entities - the bot configuration record and its commands

pub mod bot_config;
pub mod command;

pub use bot_config::{BotConfig, Intents, DEFAULT_PREFIX};
pub use command::{parse_permissions, CommandEdit, CommandKind, CommandSpec};
