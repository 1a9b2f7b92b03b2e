//! plancal library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod remote;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, cfg),
        Commands::Upcoming { .. } => cli::commands::upcoming::handle(&cli.command, cfg),
        Commands::Members { .. } => cli::commands::members::handle(&cli.command, cfg),
        Commands::MemberAdd { .. } => cli::commands::members::handle_add(&cli.command, cfg),
        Commands::MemberRemove { .. } => cli::commands::members::handle_remove(&cli.command, cfg),
        Commands::Groups => cli::commands::group::handle_list(cfg),
        Commands::Rename { .. } => cli::commands::group::handle(&cli.command, cfg),
        Commands::Color { .. } => cli::commands::color::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::login::handle_logout(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; --db overrides the storage path for this invocation
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
