//! Fixed-response command table built from a config

use serenity::all::{CreateCommand, GatewayIntents, Permissions};

use super::permissions;
use crate::domain::entities::{BotConfig, CommandKind, CommandSpec, Intents};

const SLASH_DESCRIPTION_LIMIT: usize = 100;
const NO_DESCRIPTION: &str = "No description provided";

/// A command the running bot answers
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCommand {
    pub name: String,
    pub description: String,
    pub response: String,
    pub permissions: Permissions,
}

impl ResponseCommand {
    fn from_spec(spec: &CommandSpec) -> Self {
        let (permissions, unknown) = permissions::resolve(spec.required_permissions());
        for name in unknown {
            tracing::warn!("Command '{}': ignoring unknown permission '{}'", spec.name, name);
        }
        Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            response: spec.response.clone(),
            permissions,
        }
    }

    /// `granted` is `None` when the invoker's permissions could not be
    /// resolved, e.g. the guild or channel is not cached. Direct messages
    /// resolve to the DM permission set.
    pub fn allows(&self, granted: Option<Permissions>) -> bool {
        if self.permissions.is_empty() {
            return true;
        }
        granted.map_or(false, |g| g.contains(self.permissions))
    }

    fn slash_description(&self) -> String {
        let description = self.description.trim();
        if description.is_empty() {
            return NO_DESCRIPTION.to_string();
        }
        description.chars().take(SLASH_DESCRIPTION_LIMIT).collect()
    }

    pub fn to_create_command(&self) -> CreateCommand {
        let command = CreateCommand::new(&self.name).description(self.slash_description());
        if self.permissions.is_empty() {
            command
        } else {
            command.default_member_permissions(self.permissions)
        }
    }
}

/// Prefix and slash commands of one bot
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    prefix: String,
    normal: Vec<ResponseCommand>,
    slash: Vec<ResponseCommand>,
}

impl CommandTable {
    pub fn from_config(config: &BotConfig) -> Self {
        let mut table = Self {
            prefix: config.prefix.clone(),
            ..Self::default()
        };

        for spec in &config.commands {
            match spec.kind {
                CommandKind::Normal => table.normal.push(ResponseCommand::from_spec(spec)),
                CommandKind::Slash if spec.has_valid_slash_name() => {
                    table.slash.push(ResponseCommand::from_spec(spec))
                }
                CommandKind::Slash => {
                    tracing::warn!(
                        "Skipping slash command '{}': names must be 1-32 lowercase letters, digits, '-' or '_'",
                        spec.name
                    );
                }
            }
        }

        table
    }

    /// The prefix command a message invokes, if any.
    pub fn match_message(&self, content: &str) -> Option<&ResponseCommand> {
        if self.prefix.is_empty() {
            return None;
        }
        let rest = content.strip_prefix(&self.prefix)?;
        let name = rest.split_whitespace().next()?;
        // Whitespace between prefix and name is not an invocation
        if !rest.starts_with(name) {
            return None;
        }
        self.normal.iter().find(|c| c.name == name)
    }

    pub fn slash(&self, name: &str) -> Option<&ResponseCommand> {
        self.slash.iter().find(|c| c.name == name)
    }

    pub fn has_normal_commands(&self) -> bool {
        !self.normal.is_empty()
    }

    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.slash.iter().map(ResponseCommand::to_create_command).collect()
    }

    pub fn len(&self) -> usize {
        self.normal.len() + self.slash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Non-privileged intents plus the enabled privileged ones.
pub fn gateway_intents(intents: &Intents) -> GatewayIntents {
    let mut gateway = GatewayIntents::non_privileged();
    if intents.members {
        gateway |= GatewayIntents::GUILD_MEMBERS;
    }
    if intents.message_content {
        gateway |= GatewayIntents::MESSAGE_CONTENT;
    }
    if intents.presences {
        gateway |= GatewayIntents::GUILD_PRESENCES;
    }
    gateway
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BotConfig {
        BotConfig {
            token: "abc".to_string(),
            prefix: "!".to_string(),
            commands: vec![
                CommandSpec::new("ping", "pong"),
                CommandSpec::new("purge", "Purged")
                    .with_permission("manage_messages")
                    .with_permission("made_up"),
                CommandSpec::new("rules", "Be nice").with_kind(CommandKind::Slash),
                CommandSpec::new("Bad Name", "x").with_kind(CommandKind::Slash),
            ],
            ..BotConfig::default()
        }
    }

    #[test]
    fn prefix_messages_resolve_to_normal_commands() {
        let table = CommandTable::from_config(&config());
        assert_eq!(table.match_message("!ping").unwrap().response, "pong");
        assert_eq!(table.match_message("!ping and more").unwrap().response, "pong");
        assert!(table.match_message("ping").is_none());
        assert!(table.match_message("! ping").is_none());
        assert!(table.match_message("!pingpong").is_none());
        assert!(table.match_message("!rules").is_none());
    }

    #[test]
    fn multi_character_prefix() {
        let mut config = config();
        config.prefix = "sb.".to_string();
        let table = CommandTable::from_config(&config);
        assert!(table.match_message("sb.ping").is_some());
        assert!(table.match_message("!ping").is_none());
    }

    #[test]
    fn empty_prefix_matches_nothing() {
        let mut config = config();
        config.prefix = String::new();
        let table = CommandTable::from_config(&config);
        assert!(table.match_message("ping").is_none());
    }

    #[test]
    fn invalid_slash_names_are_skipped() {
        let table = CommandTable::from_config(&config());
        assert!(table.slash("rules").is_some());
        assert!(table.slash("Bad Name").is_none());
        assert_eq!(table.len(), 3);
        assert_eq!(table.create_commands().len(), 1);
    }

    #[test]
    fn config_without_commands_gives_empty_table() {
        let table = CommandTable::from_config(&BotConfig::default());
        assert!(table.is_empty());
        assert!(!CommandTable::from_config(&config()).is_empty());
    }

    #[test]
    fn permissions_gate_normal_commands() {
        let table = CommandTable::from_config(&config());
        let purge = table.match_message("!purge").unwrap();
        assert_eq!(purge.permissions, Permissions::MANAGE_MESSAGES);

        assert!(purge.allows(Some(Permissions::MANAGE_MESSAGES | Permissions::SEND_MESSAGES)));
        assert!(!purge.allows(Some(Permissions::SEND_MESSAGES)));
        assert!(!purge.allows(None));

        let ping = table.match_message("!ping").unwrap();
        assert!(ping.allows(None));
    }

    #[test]
    fn slash_descriptions_are_filled_and_truncated() {
        let mut command = ResponseCommand::from_spec(&CommandSpec::new("rules", "Be nice"));
        assert_eq!(command.slash_description(), NO_DESCRIPTION);

        command.description = "x".repeat(150);
        assert_eq!(command.slash_description().len(), SLASH_DESCRIPTION_LIMIT);
    }

    #[test]
    fn privileged_intents_follow_flags() {
        let none = gateway_intents(&Intents::default());
        assert_eq!(none, GatewayIntents::non_privileged());

        let all = gateway_intents(&Intents {
            members: true,
            message_content: true,
            presences: true,
        });
        assert!(all.contains(GatewayIntents::GUILD_MEMBERS));
        assert!(all.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(all.contains(GatewayIntents::GUILD_PRESENCES));
        assert!(all.contains(GatewayIntents::GUILD_MESSAGES));
    }
}
