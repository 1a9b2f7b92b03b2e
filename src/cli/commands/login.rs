use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{cache, pool::DbPool};
use crate::errors::AppResult;
use crate::remote::RemoteClient;
use crate::ui::messages::success;

/// Obtain a bearer token from the remote service and store it locally.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let client = RemoteClient::new(cfg, None)?;
        let token = client.login(username, password)?;

        let pool = DbPool::new(&cfg.database)?;
        cache::set_token(&pool.conn, &token)?;

        success(format!("Logged in as {}.", username));
    }
    Ok(())
}

/// Drop the stored bearer token.
pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    cache::clear_token(&pool.conn)?;
    success("Logged out.");
    Ok(())
}
