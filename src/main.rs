//! restclient-config CLI entry point.

use anyhow::Result;
use clap::Parser;

use restclient_config::cli::{Cli, Commands};
use restclient_config::domain::models::Settings;
use restclient_config::infrastructure::logging::{LogConfig, LoggerImpl};
use restclient_config::infrastructure::settings::SettingsLoader;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli.command, cli.settings.as_deref(), cli.json) {
        restclient_config::cli::handle_error(err, cli.json);
    }
}

fn run(command: Commands, settings_path: Option<&std::path::Path>, json: bool) -> Result<()> {
    let settings: Settings = match settings_path {
        Some(path) => SettingsLoader::load_from_file(path)?,
        None => SettingsLoader::load()?,
    };
    LoggerImpl::init(&LogConfig::from(&settings.logging))?;

    match command {
        Commands::Resolve(args) => {
            restclient_config::cli::commands::resolve::execute(args, &settings, json)
        }
        Commands::Settings => restclient_config::cli::commands::settings::execute(&settings, json),
    }
}
