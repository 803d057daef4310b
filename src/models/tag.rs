use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::timestamp;

/// A label keyed by its name; there is no surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Tag {
    pub fn new(name: String) -> Self {
        let now = timestamp();
        Self {
            name,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EntryTag {
    pub entry_id: String,
    pub tag_name: String,
    pub created_at: String,
}

impl EntryTag {
    pub fn new(entry_id: String, tag_name: String) -> Self {
        Self {
            entry_id,
            tag_name,
            created_at: timestamp(),
        }
    }
}
