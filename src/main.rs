use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use sphinx_dbm::application::errors::WizardError;
use sphinx_dbm::application::services::{launch_saved, MenuNavigator};
use sphinx_dbm::infrastructure::adapters::{ConsolePrompter, DiscordLauncher};
use sphinx_dbm::infrastructure::config::Overrides;
use sphinx_dbm::infrastructure::storage::{YamlConfigStore, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "sphinx-dbm")]
#[command(about = "Configure and run a Discord bot without writing code", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Menu,
    /// Run the saved bot without the menu
    Run,
    /// Show version
    Version,
}

fn main() -> ExitCode {
    // Logs go to stderr so they don't interleave with prompts
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let store = YamlConfigStore::new(&cli.config);
    let launcher = DiscordLauncher::new(Overrides::load_env());

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => MenuNavigator::new(ConsolePrompter::stdio(), store, launcher).run(),
        Commands::Run => launch_saved(&store, &launcher),
        Commands::Version => {
            println!("sphinx-dbm v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_input_closed() => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn report(e: WizardError) -> ExitCode {
    tracing::error!("An error occurred: {}", e);
    eprintln!("{}", format!("An unexpected error occurred: {}", e).red());
    ExitCode::FAILURE
}
