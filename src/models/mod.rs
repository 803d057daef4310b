pub mod entry;
pub mod tag;

pub use entry::Entry;
pub use tag::{EntryTag, Tag};

use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Offset/limit window for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// `(offset, limit)` ready to bind, with the limit capped.
    pub fn bounds(&self) -> (i64, i64) {
        (i64::from(self.offset), i64::from(self.limit.min(MAX_PAGE_SIZE)))
    }
}

/// Current UTC time as a fixed-width RFC 3339 string.
///
/// Every stored timestamp goes through here so that `ORDER BY updated_at`
/// on the text column is chronological.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
