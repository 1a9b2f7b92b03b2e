//! Last-known remote state, kept locally so day views and member lists keep
//! working when the group service is unreachable. Corrupt or missing cache
//! entries degrade to empty/None, never to an error.

use crate::db::kv;
use crate::errors::AppResult;
use crate::models::member::Member;
use rusqlite::Connection;
use std::collections::BTreeMap;

const MEMBERS_CACHE_KEY: &str = "group_members_cache_v1";
const MY_COLOR_KEY: &str = "my_color";
const TOKEN_KEY: &str = "auth_token";

fn load_members_map(conn: &Connection) -> AppResult<BTreeMap<String, Vec<Member>>> {
    let raw = kv::get(conn, MEMBERS_CACHE_KEY)?;
    Ok(raw
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default())
}

/// Cached member list for one group (empty if never fetched).
pub fn cached_members(conn: &Connection, group_id: &str) -> AppResult<Vec<Member>> {
    let map = load_members_map(conn)?;
    Ok(map.get(group_id).cloned().unwrap_or_default())
}

/// Remember the most recent successful member fetch for a group.
pub fn store_members(conn: &Connection, group_id: &str, members: &[Member]) -> AppResult<()> {
    let mut map = load_members_map(conn)?;
    map.insert(group_id.to_string(), members.to_vec());
    let raw = serde_json::to_string(&map)
        .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
    kv::put(conn, MEMBERS_CACHE_KEY, &raw)
}

pub fn my_color(conn: &Connection) -> AppResult<Option<String>> {
    kv::get(conn, MY_COLOR_KEY)
}

pub fn set_my_color(conn: &Connection, color: &str) -> AppResult<()> {
    kv::put(conn, MY_COLOR_KEY, color)
}

pub fn token(conn: &Connection) -> AppResult<Option<String>> {
    kv::get(conn, TOKEN_KEY)
}

pub fn set_token(conn: &Connection, token: &str) -> AppResult<()> {
    kv::put(conn, TOKEN_KEY, token)
}

pub fn clear_token(conn: &Connection) -> AppResult<()> {
    kv::delete(conn, TOKEN_KEY)
}
