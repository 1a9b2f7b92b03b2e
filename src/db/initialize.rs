use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
///
/// plancal keeps all local state (event collection, membership overlay,
/// member caches, token) as JSON values in a single key-value table.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
