//! Domain traits - seams between the wizard and its surroundings

pub mod launcher;
pub mod prompt;
pub mod store;

pub use launcher::Launcher;
pub use prompt::{Notice, Prompter};
pub use store::ConfigStore;
