//! Platform adapters - the console the wizard talks through and the Discord client it launches

pub mod console;
pub mod discord;

pub use console::ConsolePrompter;
pub use discord::DiscordLauncher;
