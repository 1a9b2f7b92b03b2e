use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{cache, pool::DbPool};
use crate::errors::{AppError, AppResult};
use crate::remote::RemoteClient;
use crate::ui::messages::{detail, success};

/// List the groups the logged-in member belongs to, marking owned ones.
pub fn handle_list(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let token = cache::token(&pool.conn)?;
    let client = RemoteClient::new(cfg, token)?;

    let groups = client.get_my_groups()?;
    // profile fetch is only needed for the owner marker
    let me_id = client.get_me().ok().map(|m| m.id);

    if groups.is_empty() {
        println!("You are not in any group.");
        return Ok(());
    }

    println!("Your groups:");
    for g in &groups {
        let owner = if me_id.as_deref() == Some(g.owner_id.as_str()) {
            "  (owner)"
        } else {
            ""
        };
        detail(format!("{}  {}{}", g.id, g.name, owner));
    }
    Ok(())
}

/// Rename a group on the remote service. Ownership is enforced server-side;
/// a 403 surfaces with the server's message.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { name, group } = cmd {
        let group_id = group
            .clone()
            .or_else(|| cfg.active_group.clone())
            .ok_or_else(|| {
                AppError::Config("no group selected: pass --group or set active_group".into())
            })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Config("group name must not be empty".into()));
        }

        let pool = DbPool::new(&cfg.database)?;
        let token = cache::token(&pool.conn)?;
        let client = RemoteClient::new(cfg, token)?;

        let updated = client.rename_group(&group_id, name)?;
        success(format!("Group {} renamed to \"{}\".", updated.id, updated.name));
    }
    Ok(())
}
