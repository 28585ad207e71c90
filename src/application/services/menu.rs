use super::command_editor::CommandEditor;
use super::run_console::RunConsole;
use crate::application::errors::{PromptError, WizardError};
use crate::domain::entities::{BotConfig, Intents, DEFAULT_PREFIX};
use crate::domain::traits::{ConfigStore, Launcher, Notice, Prompter};

const TITLE: &str = "Sphinx DBM";

const BANNER: &str = r"
.oPYo.    .oPYo.    o    o   o   o    o    o    o
8         8    8    8    8   8   8b   8    `b  d'
`Yooo.   o8YooP'   o8oooo8   8   8`b  8     `bd'
    `8    8         8    8   8   8 `b 8     .PY.
     8    8         8    8   8   8  `b8    .P  Y.
`YooP'    8         8    8   8   8   `8   .P    Y.
:.....::::..::::::::..:::..::..::..:::..::..::::..:
";

const STATUS_QUESTION: &str = "Custom Status (leave empty for no status)";
const NEW_STATUS_QUESTION: &str = "New Custom Status (enter - for no status)";
const CLEAR_STATUS: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    CreateBot,
    EditBot,
    RunBot,
    Exit,
}

const MAIN_MENU: [(&str, MainChoice); 4] = [
    ("Create Bot", MainChoice::CreateBot),
    ("Edit Bot", MainChoice::EditBot),
    ("Run Bot", MainChoice::RunBot),
    ("Exit", MainChoice::Exit),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditChoice {
    Token,
    Prefix,
    Status,
    Intents,
    Commands,
    Back,
}

const EDIT_MENU: [(&str, EditChoice); 6] = [
    ("Token", EditChoice::Token),
    ("Prefix", EditChoice::Prefix),
    ("Status", EditChoice::Status),
    ("Intents", EditChoice::Intents),
    ("Commands", EditChoice::Commands),
    ("Back", EditChoice::Back),
];

pub(crate) fn labels<T>(options: &[(&'static str, T)]) -> Vec<&'static str> {
    options.iter().map(|(label, _)| *label).collect()
}

/// Main menu loop: Create Bot / Edit Bot / Run Bot / Exit
pub struct MenuNavigator<P, S, L> {
    prompter: P,
    store: S,
    launcher: L,
}

impl<P: Prompter, S: ConfigStore, L: Launcher> MenuNavigator<P, S, L> {
    pub fn new(prompter: P, store: S, launcher: L) -> Self {
        Self {
            prompter,
            store,
            launcher,
        }
    }

    pub fn into_parts(self) -> (P, S, L) {
        (self.prompter, self.store, self.launcher)
    }

    /// Show menus until the user picks Exit.
    pub fn run(&mut self) -> Result<(), WizardError> {
        self.prompter.notify(Notice::Heading, BANNER.trim_matches('\n'))?;

        loop {
            self.prompter.notify(Notice::Heading, TITLE)?;
            let picked = self
                .prompter
                .select("Select an option", &labels(&MAIN_MENU), None)?;

            match MAIN_MENU[picked].1 {
                MainChoice::CreateBot => self.create_bot()?,
                MainChoice::EditBot => self.edit_bot()?,
                MainChoice::RunBot => {
                    RunConsole::new(&mut self.prompter, &self.store, &self.launcher).run()?
                }
                MainChoice::Exit => {
                    tracing::info!("Exiting");
                    return Ok(());
                }
            }
        }
    }

    /// Collect a fresh config and save it.
    pub fn create_bot(&mut self) -> Result<(), WizardError> {
        let exists = match self.store.load() {
            Ok(config) => config.is_some(),
            Err(e) => {
                tracing::warn!("Existing config is unreadable: {}", e);
                true
            }
        };
        if exists
            && !self
                .prompter
                .confirm("A bot configuration already exists. Overwrite it?", false)?
        {
            return Ok(());
        }

        let mut config = BotConfig {
            token: ask_token(&mut self.prompter, "Bot Token", None)?,
            ..BotConfig::default()
        };
        config.prefix = self.prompter.ask("Command Prefix", Some(DEFAULT_PREFIX))?;
        config.status = self.prompter.ask(STATUS_QUESTION, Some(""))?;
        config.intents = ask_intents(&mut self.prompter, Intents::default())?;
        CommandEditor::new(&mut self.prompter).create_commands(&mut config)?;

        tracing::info!("Created bot with {} commands", config.commands.len());
        self.save(&config)?;
        Ok(())
    }

    /// Edit the saved config. Leaving the menu saves it.
    pub fn edit_bot(&mut self) -> Result<(), WizardError> {
        let Some(mut config) = self.store.load()? else {
            self.prompter
                .notify(Notice::Error, "No existing bot configuration found.")?;
            return Ok(());
        };

        loop {
            self.prompter
                .notify(Notice::Heading, "Edit Bot Configuration")?;
            let picked = self.prompter.select(
                "What would you like to edit?",
                &labels(&EDIT_MENU),
                None,
            )?;

            match EDIT_MENU[picked].1 {
                EditChoice::Token => {
                    config.token =
                        ask_token(&mut self.prompter, "New Bot Token", Some(config.token.as_str()))?;
                }
                EditChoice::Prefix => {
                    config.prefix = self
                        .prompter
                        .ask("New Command Prefix", Some(config.prefix.as_str()))?;
                }
                EditChoice::Status => {
                    let status = self
                        .prompter
                        .ask(NEW_STATUS_QUESTION, Some(config.status.as_str()))?;
                    config.status = if status == CLEAR_STATUS {
                        String::new()
                    } else {
                        status
                    };
                }
                EditChoice::Intents => {
                    config.intents = ask_intents(&mut self.prompter, config.intents)?;
                }
                EditChoice::Commands => {
                    CommandEditor::new(&mut self.prompter).edit_commands(&mut config)?;
                    self.save(&config)?;
                }
                EditChoice::Back => break,
            }
        }

        self.save(&config)?;
        Ok(())
    }

    /// Save failures are reported and the wizard carries on.
    fn save(&mut self, config: &BotConfig) -> Result<(), PromptError> {
        match self.store.save(config) {
            Ok(()) => self
                .prompter
                .notify(Notice::Success, "Configuration saved successfully!"),
            Err(e) => {
                tracing::error!("Failed to save configuration: {}", e);
                self.prompter
                    .notify(Notice::Error, &format!("Failed to save configuration: {}", e))
            }
        }
    }
}

/// Launch the saved config without going through the menus.
pub fn launch_saved(store: &impl ConfigStore, launcher: &impl Launcher) -> Result<(), WizardError> {
    let config = store.load()?.ok_or(WizardError::NoConfig)?;
    launcher.launch(&config)?;
    Ok(())
}

/// Ask for a token until a non-blank one is given.
fn ask_token<P: Prompter>(
    prompter: &mut P,
    question: &str,
    default: Option<&str>,
) -> Result<String, PromptError> {
    loop {
        let token = prompter.ask(question, default)?;
        let token = token.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
        prompter.notify(
            Notice::Error,
            "Invalid token. Please enter a non-empty bot token.",
        )?;
    }
}

fn ask_intents<P: Prompter>(prompter: &mut P, current: Intents) -> Result<Intents, PromptError> {
    Ok(Intents {
        members: prompter.confirm(
            "Enable Members Intent (required for some features)?",
            current.members,
        )?,
        message_content: prompter.confirm(
            "Enable Message Content Intent (required for reading message content)?",
            current.message_content,
        )?,
        presences: prompter.confirm(
            "Enable Presence Intent (required for member status updates)?",
            current.presences,
        )?,
    })
}
