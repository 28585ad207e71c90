pub mod command_editor;
pub mod menu;
pub mod run_console;

#[cfg(test)]
pub(crate) mod testing;

pub use command_editor::CommandEditor;
pub use menu::{launch_saved, MenuNavigator};
pub use run_console::RunConsole;
