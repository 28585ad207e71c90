//! Application layer errors

use thiserror::Error;

/// Top-level wizard errors
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    #[error("No existing bot configuration found")]
    NoConfig,
}

impl WizardError {
    /// True when the wizard stopped because its input was closed (Ctrl-D).
    pub fn is_input_closed(&self) -> bool {
        matches!(self, WizardError::Prompt(PromptError::Closed))
    }
}

/// Console prompt errors
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    Closed,
}

/// Command list errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("A command named '{0}' already exists")]
    Duplicate(String),

    #[error("'{0}' is reserved by the command menu")]
    Reserved(String),

    #[error("Command name must not be empty")]
    EmptyName,
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Bot launch errors
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Bot token is empty")]
    MissingToken,

    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Client error: {0}")]
    Client(#[from] serenity::Error),
}
