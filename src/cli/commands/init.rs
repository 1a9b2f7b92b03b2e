use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite key-value store (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    // init_all resolves relative --db names against the config dir; the
    // schema must go into that same resolved file, not a cwd-relative one
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("Database initialized at {}", db_path.display());
    Ok(())
}
