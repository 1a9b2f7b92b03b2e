use serde::{Deserialize, Serialize};

/// A group member as rendered locally. The remote service uses integer ids;
/// `remote` converts them to strings at the boundary so local storage and
/// the overlay are uniformly string-keyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub color: String,
}

impl Member {
    /// Display name: full name when present, username otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub owner_id: String,
}
