use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let yaml =
                serde_yaml::to_string(&cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("Current configuration:\n");
            println!("{}", yaml);
        } else {
            info(format!("Config file: {}", Config::config_file().display()));
        }
    }

    Ok(())
}
