use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{cache, pool::DbPool};
use crate::errors::AppResult;
use crate::remote::RemoteClient;
use crate::ui::messages::{info, success, warning};

/// Show or set the own marker color. On set, the local cache is written
/// first so the change is visible immediately; the remote update is
/// best-effort.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Color { value } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let Some(value) = value else {
            match cache::my_color(&pool.conn)? {
                Some(color) => println!("Current color: {}", color),
                None => info("No color set."),
            }
            return Ok(());
        };

        cache::set_my_color(&pool.conn, value)?;
        success(format!("Color set to {} locally.", value));

        let token = cache::token(&pool.conn)?;
        let pushed =
            RemoteClient::new(cfg, token).and_then(|client| client.update_my_color(value));
        if let Err(e) = pushed {
            warning(format!("{} — color will stay local until the next push.", e));
        }
    }
    Ok(())
}
