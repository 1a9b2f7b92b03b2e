//! Membership overlay: a locally persisted add/remove patch applied on top
//! of the server-provided member list of each group.
//!
//! This is a best-effort local patch. It survives re-fetches of the base
//! list and is re-applied on top, but it makes no claim of correctness
//! against concurrent remote membership changes.

use crate::db::kv;
use crate::errors::{AppError, AppResult};
use crate::models::member::Member;
use crate::models::overlay::GroupOverlay;
use rusqlite::Connection;
use std::collections::BTreeMap;

const OVERLAY_KEY: &str = "membership_overlay_v1";

pub struct MembershipOverlay<'a> {
    conn: &'a Connection,
}

impl<'a> MembershipOverlay<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Whole overlay mapping, keyed by group id. Fails soft: corrupt or
    /// missing storage yields an empty overlay.
    fn load(&self) -> AppResult<BTreeMap<String, GroupOverlay>> {
        let raw = kv::get(self.conn, OVERLAY_KEY)?;
        Ok(raw
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }

    fn save(&self, map: &mut BTreeMap<String, GroupOverlay>) -> AppResult<()> {
        // don't persist groups whose patch has emptied out
        map.retain(|_, entry| !entry.is_empty());
        let raw = serde_json::to_string(map).map_err(|e| AppError::Other(e.to_string()))?;
        kv::put(self.conn, OVERLAY_KEY, &raw)
    }

    /// The stored overlay entry for one group (empty if none).
    pub fn group_overlay(&self, group_id: &str) -> AppResult<GroupOverlay> {
        Ok(self.load()?.remove(group_id).unwrap_or_default())
    }

    /// Effective member list for a group: base members minus the removed
    /// usernames, plus the locally added entries. Added entries are
    /// deduplicated by username and never shadow a base member with the
    /// same username (base wins, preserving canonical identity).
    pub fn effective_members(
        &self,
        group_id: &str,
        base_members: &[Member],
    ) -> AppResult<Vec<Member>> {
        let overlay = self.group_overlay(group_id)?;

        let mut out: Vec<Member> = base_members
            .iter()
            .filter(|m| !overlay.removed_usernames.contains(&m.username))
            .cloned()
            .collect();

        for added in overlay.added {
            let username_taken = out.iter().any(|m| m.username == added.username);
            if !username_taken && !overlay.removed_usernames.contains(&added.username) {
                out.push(added);
            }
        }
        Ok(out)
    }

    /// Record a locally added member. If the username was marked removed,
    /// the add only cancels that removal (restoring the base state) and does
    /// not create a local entry. Adding twice is a no-op.
    pub fn mark_added(&self, group_id: &str, member: Member) -> AppResult<()> {
        let mut map = self.load()?;
        let entry = map.entry(group_id.to_string()).or_default();

        if entry.removed_usernames.iter().any(|u| u == &member.username) {
            entry.removed_usernames.retain(|u| u != &member.username);
        } else if !entry.added.iter().any(|m| m.username == member.username) {
            entry.added.push(member);
        }
        self.save(&mut map)
    }

    /// Record a locally removed username. Idempotent; also drops any
    /// matching locally added entry.
    pub fn mark_removed(&self, group_id: &str, username: &str) -> AppResult<()> {
        let mut map = self.load()?;
        let entry = map.entry(group_id.to_string()).or_default();

        entry.added.retain(|m| m.username != username);
        if !entry.removed_usernames.iter().any(|u| u == username) {
            entry.removed_usernames.push(username.to_string());
        }
        self.save(&mut map)
    }
}
