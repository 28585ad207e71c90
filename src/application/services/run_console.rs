use super::menu::labels;
use crate::application::errors::WizardError;
use crate::domain::entities::{BotConfig, CommandKind};
use crate::domain::traits::{ConfigStore, Launcher, Notice, Prompter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunChoice {
    Start,
    Status,
    Exit,
}

const RUN_MENU: [(&str, RunChoice); 3] = [
    ("start", RunChoice::Start),
    ("status", RunChoice::Status),
    ("exit", RunChoice::Exit),
];

/// The "Run Bot" console: start the saved bot or inspect it
pub struct RunConsole<'a, P, S, L> {
    prompter: &'a mut P,
    store: &'a S,
    launcher: &'a L,
}

impl<'a, P: Prompter, S: ConfigStore, L: Launcher> RunConsole<'a, P, S, L> {
    pub fn new(prompter: &'a mut P, store: &'a S, launcher: &'a L) -> Self {
        Self {
            prompter,
            store,
            launcher,
        }
    }

    pub fn run(&mut self) -> Result<(), WizardError> {
        loop {
            let picked = self
                .prompter
                .select("Enter a command", &labels(&RUN_MENU), None)?;
            match RUN_MENU[picked].1 {
                RunChoice::Start => self.start()?,
                RunChoice::Status => self.status()?,
                RunChoice::Exit => return Ok(()),
            }
        }
    }

    fn load(&mut self) -> Result<Option<BotConfig>, WizardError> {
        let config = self.store.load()?;
        if config.is_none() {
            self.prompter
                .notify(Notice::Error, "No existing bot configuration found.")?;
        }
        Ok(config)
    }

    fn start(&mut self) -> Result<(), WizardError> {
        let Some(config) = self.load()? else {
            return Ok(());
        };

        self.prompter
            .notify(Notice::Info, "Starting bot. Press Ctrl-C to stop it.")?;
        match self.launcher.launch(&config) {
            Ok(()) => self.prompter.notify(Notice::Info, "Bot stopped.")?,
            Err(e) => {
                tracing::error!("Bot stopped with an error: {}", e);
                self.prompter
                    .notify(Notice::Error, &format!("Bot stopped with an error: {}", e))?;
            }
        }
        Ok(())
    }

    fn status(&mut self) -> Result<(), WizardError> {
        let Some(config) = self.load()? else {
            return Ok(());
        };
        for line in summary(&config) {
            self.prompter.notify(Notice::Info, &line)?;
        }
        Ok(())
    }
}

fn summary(config: &BotConfig) -> Vec<String> {
    let intents = config.intents.enabled();
    let mut lines = vec![
        format!("Prefix: {}", config.prefix),
        format!("Status: {}", config.status().unwrap_or("(none)")),
        format!(
            "Privileged intents: {}",
            if intents.is_empty() {
                "none".to_string()
            } else {
                intents.join(", ")
            }
        ),
        format!("Commands: {}", config.commands.len()),
    ];

    for command in &config.commands {
        let invocation = match command.kind {
            CommandKind::Slash => format!("/{}", command.name),
            CommandKind::Normal => format!("{}{}", config.prefix, command.name),
        };
        if command.description.is_empty() {
            lines.push(format!("  {}", invocation));
        } else {
            lines.push(format!("  {} - {}", invocation, command.description));
        }
    }

    lines
}
