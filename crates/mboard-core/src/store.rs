//! SQLite-backed storage for messages.
//!
//! Uses [`sqlx`] with the `sqlite` feature.  There is no migration history;
//! [`MessageStore::initialize`] creates the schema with a single idempotent
//! `CREATE TABLE IF NOT EXISTS` and is run automatically on open.
//!
//! # Connections
//!
//! Every operation acquires a connection from the pool, uses it for the
//! duration of the call, and returns it when the guard drops.  No connection
//! state is carried between operations.
//!
//! # Timestamps
//!
//! `created_at` is bound as RFC 3339 text.  Timestamps are always UTC, so
//! the textual form sorts chronologically and `ORDER BY created_at` needs no
//! normalization at query time.

use std::path::Path;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::model::Message;

/// SQLite-backed message store.
#[derive(Clone, Debug)]
pub struct MessageStore {
    pool: SqlitePool,
}

impl MessageStore {
    /// Open (or create) the SQLite database at `path` and create the schema.
    ///
    /// Missing parent directories are created first, so a fresh checkout
    /// needs no setup beyond starting the server.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, sqlx::Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Open an isolated in-memory database, for tests.
    ///
    /// An in-memory SQLite database is private to its connection, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn open_in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new().in_memory(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Create the `messages` table when missing.  Safe to call repeatedly;
    /// existing rows are untouched.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS messages ( \
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 content TEXT NOT NULL, \
                 created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP \
             )",
        )
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// All messages, most recent first.
    pub async fn list(&self) -> Result<Vec<Message>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        let rows: Vec<(i64, String, String)> = sqlx::query_as(
            "SELECT id, content, created_at FROM messages ORDER BY created_at DESC",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, content, created_at)| Message {
                id,
                content,
                created_at: parse_timestamp(&created_at),
            })
            .collect())
    }

    /// Insert a message and return the persisted row.
    ///
    /// The creation instant is read once; the same value is bound into the
    /// INSERT and carried in the returned [`Message`].
    pub async fn insert(&self, content: &str) -> Result<Message, sqlx::Error> {
        let created_at = Utc::now();
        let created_at_text = created_at.to_rfc3339();

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("INSERT INTO messages (content, created_at) VALUES (?1, ?2)")
            .bind(content)
            .bind(&created_at_text)
            .execute(&mut *conn)
            .await?;

        Ok(Message {
            id: result.last_insert_rowid(),
            content: content.to_owned(),
            created_at,
        })
    }
}

/// Decode a stored RFC 3339 timestamp, falling back to `Utc::now()` for a
/// row written with a non-conforming value.
fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap_or_else(|e: chrono::ParseError| {
        tracing::warn!(raw = %raw, error = %e, "failed to parse message created_at; using now");
        Utc::now()
    })
}
