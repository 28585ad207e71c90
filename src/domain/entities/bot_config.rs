use serde::{Deserialize, Serialize};

use super::command::{is_reserved_name, CommandEdit, CommandSpec};
use crate::application::errors::CommandError;

pub const DEFAULT_PREFIX: &str = "!";

/// Gateway intent toggles. Non-privileged intents are always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Intents {
    #[serde(default)]
    pub members: bool,
    #[serde(default)]
    pub message_content: bool,
    #[serde(default)]
    pub presences: bool,
}

impl Intents {
    /// Names of the enabled flags, in file order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("members", self.members),
            ("message_content", self.message_content),
            ("presences", self.presences),
        ]
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Everything needed to build and run a bot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BotConfig {
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub intents: Intents,
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: default_prefix(),
            status: String::new(),
            intents: Intents::default(),
            commands: Vec::new(),
        }
    }
}

impl BotConfig {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Status text, `None` when blank.
    pub fn status(&self) -> Option<&str> {
        let status = self.status.trim();
        (!status.is_empty()).then_some(status)
    }

    pub fn command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.matches(name))
    }

    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }

    /// Check that `name` could be given to a command, ignoring the command
    /// currently called `except` (used when renaming).
    pub fn check_name(&self, name: &str, except: Option<&str>) -> Result<(), CommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::EmptyName);
        }
        if is_reserved_name(name) {
            return Err(CommandError::Reserved(name.to_string()));
        }
        let taken = self
            .commands
            .iter()
            .filter(|c| except.map_or(true, |e| !c.matches(e)))
            .any(|c| c.matches(name));
        if taken {
            return Err(CommandError::Duplicate(name.to_string()));
        }
        Ok(())
    }

    pub fn add_command(&mut self, command: CommandSpec) -> Result<(), CommandError> {
        self.check_name(&command.name, None)?;
        self.commands.push(command);
        Ok(())
    }

    /// Change one field of the command called `name`.
    pub fn apply_edit(&mut self, name: &str, edit: CommandEdit) -> Result<(), CommandError> {
        if let CommandEdit::Name(new_name) = &edit {
            self.check_name(new_name, Some(name))?;
        }
        let command = self
            .commands
            .iter_mut()
            .find(|c| c.matches(name))
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
        edit.apply(command);
        Ok(())
    }

    pub fn remove_command(&mut self, name: &str) -> Result<CommandSpec, CommandError> {
        let index = self
            .commands
            .iter()
            .position(|c| c.matches(name))
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
        Ok(self.commands.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CommandKind;

    fn sample() -> BotConfig {
        let mut config = BotConfig {
            token: "abc".to_string(),
            ..BotConfig::default()
        };
        config.add_command(CommandSpec::new("ping", "pong")).unwrap();
        config
            .add_command(
                CommandSpec::new("rules", "Be nice")
                    .with_description("Server rules")
                    .with_kind(CommandKind::Slash),
            )
            .unwrap();
        config
    }

    #[test]
    fn add_then_delete_restores_list() {
        let mut config = sample();
        let before = config.commands.clone();

        config.add_command(CommandSpec::new("hello", "hi there")).unwrap();
        assert_eq!(config.commands.len(), 3);

        let removed = config.remove_command("hello").unwrap();
        assert_eq!(removed.response, "hi there");
        assert_eq!(config.commands, before);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut config = sample();
        assert_eq!(
            config.add_command(CommandSpec::new("PING", "again")),
            Err(CommandError::Duplicate("PING".to_string()))
        );
        assert_eq!(
            config.add_command(CommandSpec::new("Back", "")),
            Err(CommandError::Reserved("Back".to_string()))
        );
        assert_eq!(
            config.add_command(CommandSpec::new("  ", "")),
            Err(CommandError::EmptyName)
        );
    }

    #[test]
    fn edit_changes_only_that_field() {
        let mut config = sample();
        let before = config.command("rules").unwrap().clone();

        config
            .apply_edit("rules", CommandEdit::Response("Be kind".to_string()))
            .unwrap();

        let after = config.command("rules").unwrap();
        assert_eq!(after.response, "Be kind");
        assert_eq!(
            *after,
            CommandSpec {
                response: "Be kind".to_string(),
                ..before
            }
        );
        assert_eq!(config.command("ping").unwrap().response, "pong");
    }

    #[test]
    fn rename_checks_other_commands_only() {
        let mut config = sample();
        config
            .apply_edit("ping", CommandEdit::Name("Ping".to_string()))
            .unwrap();
        assert_eq!(config.command_names(), vec!["Ping", "rules"]);

        assert_eq!(
            config.apply_edit("ping", CommandEdit::Name("rules".to_string())),
            Err(CommandError::Duplicate("rules".to_string()))
        );
    }

    #[test]
    fn missing_command_is_reported() {
        let mut config = sample();
        assert_eq!(
            config.remove_command("nope"),
            Err(CommandError::NotFound("nope".to_string()))
        );
        assert!(config
            .apply_edit("nope", CommandEdit::Kind(CommandKind::Slash))
            .is_err());
    }

    #[test]
    fn blank_status_is_none() {
        let mut config = sample();
        assert_eq!(config.status(), None);
        config.status = " Playing chess ".to_string();
        assert_eq!(config.status(), Some("Playing chess"));
    }

    #[test]
    fn enabled_intents_are_listed() {
        let intents = Intents {
            members: true,
            presences: true,
            ..Intents::default()
        };
        assert_eq!(intents.enabled(), vec!["members", "presences"]);
    }
}
