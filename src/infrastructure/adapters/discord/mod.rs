//! Discord launcher built on serenity

pub mod permissions;
pub mod table;

use async_trait::async_trait;
use serenity::all::{
    ActivityData, Command, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EventHandler, Interaction, Message, Ready,
};
use serenity::Client;

use crate::application::errors::LaunchError;
use crate::domain::entities::BotConfig;
use crate::domain::traits::Launcher;
use crate::infrastructure::config::Overrides;

pub use table::{gateway_intents, CommandTable, ResponseCommand};

/// Answers configured commands with their fixed responses
pub struct ResponseHandler {
    table: CommandTable,
    status: Option<String>,
}

impl ResponseHandler {
    pub fn new(table: CommandTable, status: Option<String>) -> Self {
        Self { table, status }
    }
}

#[async_trait]
impl EventHandler for ResponseHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        if let Some(status) = &self.status {
            ctx.set_activity(Some(ActivityData::playing(status)));
        }

        // Replaces the whole global set, so removed commands disappear too
        match Command::set_global_commands(&ctx.http, self.table.create_commands()).await {
            Ok(registered) => tracing::info!("Synced {} slash commands", registered.len()),
            Err(e) => tracing::error!("Failed to register slash commands: {}", e),
        }

        tracing::info!("Logged in as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(command) = self.table.match_message(&msg.content) else {
            return;
        };

        if !command.permissions.is_empty() {
            let granted = msg.author_permissions(&ctx.cache);
            if !command.allows(granted) {
                tracing::info!("{} lacks permissions for !{}", msg.author.name, command.name);
                return;
            }
        }

        tracing::debug!("{} invoked {}", msg.author.name, command.name);
        if let Err(e) = msg.channel_id.say(&ctx.http, &command.response).await {
            tracing::warn!("Failed to answer {}: {}", command.name, e);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(invocation) = interaction else {
            return;
        };
        let Some(command) = self.table.slash(&invocation.data.name) else {
            tracing::warn!("Received unknown slash command /{}", invocation.data.name);
            return;
        };

        tracing::debug!("{} invoked /{}", invocation.user.name, command.name);
        let reply = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content(&command.response),
        );
        if let Err(e) = invocation.create_response(&ctx.http, reply).await {
            tracing::warn!("Failed to answer /{}: {}", command.name, e);
        }
    }
}

/// Runs a config as a Discord bot until the client stops or Ctrl-C is pressed
#[derive(Debug, Clone, Default)]
pub struct DiscordLauncher {
    overrides: Overrides,
}

impl DiscordLauncher {
    pub fn new(overrides: Overrides) -> Self {
        Self { overrides }
    }
}

impl Launcher for DiscordLauncher {
    fn launch(&self, config: &BotConfig) -> Result<(), LaunchError> {
        let config = self.overrides.apply(config);
        if !config.has_token() {
            return Err(LaunchError::MissingToken);
        }

        let rt = tokio::runtime::Runtime::new().map_err(LaunchError::Runtime)?;
        rt.block_on(run(config))
    }
}

async fn run(config: BotConfig) -> Result<(), LaunchError> {
    let table = CommandTable::from_config(&config);
    if table.is_empty() {
        tracing::warn!("No commands configured; the bot will only show its status");
    } else {
        tracing::info!("Loaded {} commands", table.len());
    }
    if table.has_normal_commands() && !config.intents.message_content {
        tracing::warn!("Message Content intent is off; prefix commands only work in DMs and mentions");
    }

    let intents = gateway_intents(&config.intents);
    let handler = ResponseHandler::new(table, config.status().map(str::to_string));

    let mut client = Client::builder(config.token.trim(), intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    let shutdown = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down bot");
            shard_manager.shutdown_all().await;
        }
    });

    tracing::info!("Starting bot with prefix {}", config.prefix);
    let result = client.start().await;
    shutdown.abort();
    result.map_err(LaunchError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_fails_before_connecting() {
        let launcher = DiscordLauncher::default();
        let config = BotConfig {
            token: "   ".to_string(),
            ..BotConfig::default()
        };
        assert!(matches!(launcher.launch(&config), Err(LaunchError::MissingToken)));
    }
}
