use crate::application::errors::PromptError;
use crate::domain::entities::command::is_reserved_name;
use crate::domain::entities::{parse_permissions, BotConfig, CommandEdit, CommandKind, CommandSpec};
use crate::domain::traits::{Notice, Prompter};

const PERMISSIONS_QUESTION: &str =
    "Required Permissions (comma-separated, e.g., manage_messages, administrator)";

const EDIT_PERMISSIONS_QUESTION: &str =
    "Required Permissions (comma-separated, enter - for none)";
const NO_PERMISSIONS: &str = "-";

const SLASH_NAME_WARNING: &str = "Slash command names must be 1-32 lowercase letters, digits, '-' or '_'. \
     This command will be skipped when the bot runs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
    Response,
    Type,
    Permissions,
    Delete,
    Back,
}

const FIELDS: [(&str, Field); 7] = [
    ("Name", Field::Name),
    ("Description", Field::Description),
    ("Response", Field::Response),
    ("Type", Field::Type),
    ("Permissions", Field::Permissions),
    ("Delete", Field::Delete),
    ("Back", Field::Back),
];

const KINDS: [(&str, CommandKind); 2] = [("slash", CommandKind::Slash), ("normal", CommandKind::Normal)];

const ADD_NEW: &str = "Add New Command";
const BACK: &str = "Back";
const MENU_ENTRIES: usize = 2;

/// Interactive create/edit/delete of a config's commands
pub struct CommandEditor<'p, P: Prompter> {
    prompter: &'p mut P,
}

impl<'p, P: Prompter> CommandEditor<'p, P> {
    pub fn new(prompter: &'p mut P) -> Self {
        Self { prompter }
    }

    /// Add commands until the user declines.
    pub fn create_commands(&mut self, config: &mut BotConfig) -> Result<(), PromptError> {
        let mut question = "Add a command?";
        while self.prompter.confirm(question, true)? {
            self.add_command(config)?;
            question = "Add another command?";
        }
        Ok(())
    }

    /// Prompt for every field of a new command and append it.
    pub fn add_command(&mut self, config: &mut BotConfig) -> Result<(), PromptError> {
        let name = self.ask_name(config, "Command Name", None)?;
        let description = self.prompter.ask("Description", None)?;
        let response = self.prompter.ask("Response", None)?;
        let kind = self.ask_kind("Command Type (slash/normal)", CommandKind::Normal)?;
        let permissions = parse_permissions(&self.prompter.ask(PERMISSIONS_QUESTION, Some(""))?);

        let command = CommandSpec {
            name,
            description,
            response,
            kind,
            permissions,
        };
        self.warn_slash_name(&command)?;

        // ask_name already checked the name
        if let Err(e) = config.add_command(command) {
            self.prompter.notify(Notice::Error, &e.to_string())?;
        }
        Ok(())
    }

    /// Command-selection menu: pick a command to edit, add one, or go back.
    /// The menu entries come first so they win over same-named commands in
    /// older files; such commands are listed as `<name> (command)`.
    pub fn edit_commands(&mut self, config: &mut BotConfig) -> Result<(), PromptError> {
        loop {
            let names: Vec<String> = config.commands.iter().map(|c| c.name.clone()).collect();
            let labels: Vec<String> = names
                .iter()
                .map(|name| {
                    if is_reserved_name(name) {
                        format!("{} (command)", name)
                    } else {
                        name.clone()
                    }
                })
                .collect();
            let mut choices = vec![ADD_NEW, BACK];
            choices.extend(labels.iter().map(String::as_str));

            let picked = self.prompter.select("Select a command to edit", &choices, None)?;
            match picked {
                0 => self.add_command(config)?,
                1 => return Ok(()),
                _ => self.edit_command(config, &names[picked - MENU_ENTRIES])?,
            }
        }
    }

    /// Field-by-field editing of one command. `Delete` removes it.
    pub fn edit_command(&mut self, config: &mut BotConfig, name: &str) -> Result<(), PromptError> {
        let mut name = name.to_string();

        loop {
            let Some(current) = config.command(&name).cloned() else {
                return Ok(());
            };
            self.prompter
                .notify(Notice::Heading, &format!("Editing Command: {}", current.name))?;

            let labels: Vec<&str> = FIELDS.iter().map(|(label, _)| *label).collect();
            let picked = self.prompter.select("Select field to edit", &labels, None)?;

            let edit = match FIELDS[picked].1 {
                Field::Name => {
                    let new_name = self.ask_name(config, "New Command Name", Some(current.name.as_str()))?;
                    CommandEdit::Name(new_name)
                }
                Field::Description => CommandEdit::Description(
                    self.prompter.ask("New Description", Some(current.description.as_str()))?,
                ),
                Field::Response => CommandEdit::Response(
                    self.prompter.ask("New Response", Some(current.response.as_str()))?,
                ),
                Field::Type => {
                    CommandEdit::Kind(self.ask_kind("New Command Type (slash/normal)", current.kind)?)
                }
                Field::Permissions => {
                    let existing = current.permissions.join(", ");
                    let answer = self
                        .prompter
                        .ask(EDIT_PERMISSIONS_QUESTION, Some(existing.as_str()))?;
                    if answer == NO_PERMISSIONS {
                        CommandEdit::Permissions(Vec::new())
                    } else {
                        CommandEdit::Permissions(parse_permissions(&answer))
                    }
                }
                Field::Delete => {
                    if let Err(e) = config.remove_command(&name) {
                        self.prompter.notify(Notice::Error, &e.to_string())?;
                    } else {
                        self.prompter.notify(Notice::Warning, "Command deleted!")?;
                    }
                    return Ok(());
                }
                Field::Back => return Ok(()),
            };

            let renamed = match &edit {
                CommandEdit::Name(new_name) => Some(new_name.clone()),
                _ => None,
            };
            match config.apply_edit(&name, edit) {
                Ok(()) => {
                    if let Some(new_name) = renamed {
                        name = new_name;
                    }
                    if let Some(updated) = config.command(&name).cloned() {
                        self.warn_slash_name(&updated)?;
                    }
                }
                Err(e) => self.prompter.notify(Notice::Error, &e.to_string())?,
            }
        }
    }

    /// Ask for a name until it is non-empty, unused and not a menu entry.
    /// `current` is the command being renamed, if any.
    fn ask_name(
        &mut self,
        config: &BotConfig,
        question: &str,
        current: Option<&str>,
    ) -> Result<String, PromptError> {
        loop {
            let name = self.prompter.ask(question, current)?;
            match config.check_name(&name, current) {
                Ok(()) => return Ok(name),
                Err(e) => self.prompter.notify(Notice::Error, &e.to_string())?,
            }
        }
    }

    fn ask_kind(&mut self, question: &str, default: CommandKind) -> Result<CommandKind, PromptError> {
        let labels: Vec<&str> = KINDS.iter().map(|(label, _)| *label).collect();
        let picked = self.prompter.select(question, &labels, Some(default.as_str()))?;
        Ok(KINDS[picked].1)
    }

    fn warn_slash_name(&mut self, command: &CommandSpec) -> Result<(), PromptError> {
        if command.kind == CommandKind::Slash && !command.has_valid_slash_name() {
            self.prompter.notify(Notice::Warning, SLASH_NAME_WARNING)?;
        }
        Ok(())
    }
}
