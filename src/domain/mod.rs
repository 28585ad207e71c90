//! Domain layer - Core records with no knowledge of the console or Discord
//!
//! This layer contains:
//! - Entities: BotConfig, Intents, CommandSpec
//! - Traits: Abstractions for infrastructure (Prompter, ConfigStore, Launcher)

pub mod entities;
pub mod traits;
