//! Row types for the message board schema.

use chrono::{DateTime, Utc};

/// A row in the `messages` table.
#[derive(Debug, Clone)]
pub struct Message {
    /// SQLite rowid; unique and strictly increasing across inserts.
    pub id: i64,
    /// Message body as supplied by the author; never empty.
    pub content: String,
    /// Instant the row was created, captured once at insert time.
    pub created_at: DateTime<Utc>,
}
