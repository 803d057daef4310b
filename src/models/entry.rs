use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Entry {
    pub fn new(content: String) -> Self {
        let now = timestamp();
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
