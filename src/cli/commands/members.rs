use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::overlay::MembershipOverlay;
use crate::db::{cache, pool::DbPool};
use crate::errors::{AppError, AppResult};
use crate::models::member::Member;
use crate::remote::RemoteClient;
use crate::ui::messages::{detail, success, warning};

fn resolve_group(explicit: &Option<String>, cfg: &Config) -> AppResult<String> {
    explicit
        .clone()
        .or_else(|| cfg.active_group.clone())
        .ok_or_else(|| {
            AppError::Config("no group selected: pass --group or set active_group".into())
        })
}

/// List the effective members of a group: remote base list (cached on
/// success, cache fallback on failure) patched by the local overlay.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Members { group } = cmd {
        let group_id = resolve_group(group, cfg)?;

        let pool = DbPool::new(&cfg.database)?;

        let token = cache::token(&pool.conn)?;
        let fetched = RemoteClient::new(cfg, token)
            .and_then(|client| client.get_group_members(&group_id));

        let base: Vec<Member> = match fetched {
            Ok(members) => {
                cache::store_members(&pool.conn, &group_id, &members)?;
                members
            }
            Err(e) => {
                warning(format!("{} — using last-known member list.", e));
                cache::cached_members(&pool.conn, &group_id)?
            }
        };

        let overlay = MembershipOverlay::new(&pool.conn);
        let members = overlay.effective_members(&group_id, &base)?;

        if members.is_empty() {
            println!("No members in group {}.", group_id);
            return Ok(());
        }

        println!("Members of group {}:", group_id);
        for m in &members {
            detail(format!("{} (@{})  {}", m.display_name(), m.username, m.color));
        }
    }
    Ok(())
}

/// Locally add a member (overlay only; the server list is untouched).
pub fn handle_add(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::MemberAdd {
        username,
        name,
        color,
        group,
    } = cmd
    {
        let group_id = resolve_group(group, cfg)?;
        let pool = DbPool::new(&cfg.database)?;

        let member = Member {
            id: format!("local:{}", username),
            username: username.clone(),
            full_name: name.clone(),
            color: color.clone().unwrap_or_else(|| "#c9b08a".to_string()),
        };

        MembershipOverlay::new(&pool.conn).mark_added(&group_id, member)?;
        success(format!("Added @{} to group {} locally.", username, group_id));
    }
    Ok(())
}

/// Locally remove a member (overlay only).
pub fn handle_remove(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::MemberRemove { username, group } = cmd {
        let group_id = resolve_group(group, cfg)?;
        let pool = DbPool::new(&cfg.database)?;

        MembershipOverlay::new(&pool.conn).mark_removed(&group_id, username)?;
        success(format!(
            "Removed @{} from group {} locally.",
            username, group_id
        ));
    }
    Ok(())
}
