// src/modules/avatar/database.rs
// Key/value cache holding the generated avatar

use rusqlite::{params, OptionalExtension};

use crate::error::Result;
use crate::util::database::Database;

/// Trait to add avatar cache operations to Database
pub trait AvatarDatabase {
    fn init_avatar_schema(&self) -> Result<()>;

    fn get_cached_avatar(&self, key: &str) -> Result<Option<String>>;
    fn cache_avatar(&self, key: &str, data_url: &str) -> Result<()>;
}

impl AvatarDatabase for Database {
    fn init_avatar_schema(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS local_cache (
                cache_key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    fn get_cached_avatar(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;

        let value = conn
            .query_row(
                "SELECT value FROM local_cache WHERE cache_key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value.filter(|v| !v.is_empty()))
    }

    fn cache_avatar(&self, key: &str, data_url: &str) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        let conn = self.conn()?;

        conn.execute(
            "INSERT OR REPLACE INTO local_cache (cache_key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, data_url, now],
        )?;

        Ok(())
    }
}
