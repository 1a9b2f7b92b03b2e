use crate::models::member::Member;
use serde::{Deserialize, Serialize};

/// Locally stored add/remove patch for one group's membership.
///
/// Survives re-fetches of the base member list: the base is re-fetched and
/// the overlay re-applied on top. After any mutation a username is never in
/// both `added` and `removed_usernames`, and a remove-then-add pair leaves
/// it in neither.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupOverlay {
    #[serde(default)]
    pub added: Vec<Member>,
    #[serde(default)]
    pub removed_usernames: Vec<String>,
}

impl GroupOverlay {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed_usernames.is_empty()
    }
}
