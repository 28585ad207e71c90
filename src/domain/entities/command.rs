use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Entries of the command-selection menu that cannot double as command names.
pub const RESERVED_NAMES: [&str; 2] = ["Add New Command", "Back"];

static SLASH_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9_-]{1,32}$").unwrap());

/// How a command is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// Application command, answered through an interaction
    Slash,
    /// Prefix command, answered in the message channel
    #[default]
    Normal,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Slash => "slash",
            CommandKind::Normal => "normal",
        }
    }
}

/// A fixed text-response command
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct CommandSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub response: String,
    #[serde(rename = "type", default)]
    pub kind: CommandKind,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: response.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_kind(mut self, kind: CommandKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Permissions with blank entries dropped. Files written by older
    /// versions store `[""]` for "no permissions".
    pub fn required_permissions(&self) -> impl Iterator<Item = &str> {
        self.permissions
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    }

    /// Whether Discord would accept this name for an application command.
    pub fn has_valid_slash_name(&self) -> bool {
        SLASH_NAME.is_match(&self.name)
    }
}

/// Parse a comma-separated permission list, e.g. `manage_messages, administrator`.
pub fn parse_permissions(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES
        .iter()
        .any(|r| r.to_lowercase() == name.trim().to_lowercase())
}

/// A single-field change to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEdit {
    Name(String),
    Description(String),
    Response(String),
    Kind(CommandKind),
    Permissions(Vec<String>),
}

impl CommandEdit {
    pub(crate) fn apply(self, command: &mut CommandSpec) {
        match self {
            CommandEdit::Name(name) => command.name = name,
            CommandEdit::Description(desc) => command.description = desc,
            CommandEdit::Response(response) => command.response = response,
            CommandEdit::Kind(kind) => command.kind = kind,
            CommandEdit::Permissions(perms) => command.permissions = perms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_permissions(" manage_messages, ,administrator "),
            vec!["manage_messages".to_string(), "administrator".to_string()]
        );
        assert!(parse_permissions("").is_empty());
    }

    #[test]
    fn legacy_blank_permission_is_ignored() {
        let cmd = CommandSpec::new("ping", "pong").with_permission("");
        assert_eq!(cmd.required_permissions().count(), 0);
    }

    #[test]
    fn slash_name_rules() {
        assert!(CommandSpec::new("server-info", "").has_valid_slash_name());
        assert!(!CommandSpec::new("Ping", "").has_valid_slash_name());
        assert!(!CommandSpec::new("two words", "").has_valid_slash_name());
        assert!(!CommandSpec::new("", "").has_valid_slash_name());
    }

    #[test]
    fn reserved_names_match_menu_entries() {
        assert!(is_reserved_name("back"));
        assert!(is_reserved_name("add new command"));
        assert!(!is_reserved_name("backup"));
    }
}
