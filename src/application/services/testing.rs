//! Test doubles for driving the wizard without a terminal, disk or network

use std::cell::RefCell;
use std::io::Cursor;

use crate::application::errors::{LaunchError, StorageError};
use crate::domain::entities::BotConfig;
use crate::domain::traits::{ConfigStore, Launcher};
use crate::infrastructure::adapters::ConsolePrompter;

pub type ScriptedPrompter = ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>>;

pub fn scripted(input: &str) -> ScriptedPrompter {
    ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn output(prompter: ScriptedPrompter) -> String {
    String::from_utf8(prompter.into_output()).unwrap()
}

#[derive(Default)]
pub struct MemoryStore {
    pub config: RefCell<Option<BotConfig>>,
    pub saves: RefCell<usize>,
    pub fail_saves: bool,
}

impl MemoryStore {
    pub fn with(config: BotConfig) -> Self {
        Self {
            config: RefCell::new(Some(config)),
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<BotConfig> {
        self.config.borrow().clone()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<Option<BotConfig>, StorageError> {
        Ok(self.config.borrow().clone())
    }

    fn save(&self, config: &BotConfig) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        *self.config.borrow_mut() = Some(config.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

/// Records launched configs instead of connecting
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: RefCell<Vec<BotConfig>>,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, config: &BotConfig) -> Result<(), LaunchError> {
        if !config.has_token() {
            return Err(LaunchError::MissingToken);
        }
        self.launched.borrow_mut().push(config.clone());
        Ok(())
    }
}
