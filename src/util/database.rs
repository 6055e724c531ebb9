// src/util/database.rs
// Core database struct with connection management only

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{DeterminedError, Result};

/// Local store backing the persistent caches. Module-specific tables and
/// queries live in each module's `database.rs` as traits on this type.
#[derive(Clone)]
pub struct Database {
    pub(crate) app_conn: Arc<Mutex<Connection>>,
}

// Manual Debug implementation since Mutex<Connection> doesn't implement Debug
impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("app_conn", &"Arc<Mutex<Connection>>")
            .finish()
    }
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }

        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let db = Database {
            app_conn: Arc::new(Mutex::new(conn)),
        };

        db.init_all_schemas()?;

        Ok(db)
    }

    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.app_conn.lock().map_err(|_| DeterminedError::DatabaseLock)
    }

    fn init_all_schemas(&self) -> Result<()> {
        use crate::modules::avatar::database::AvatarDatabase;

        self.init_avatar_schema()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_parent_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("db").join("determined.db");

        Database::open(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_clones_share_one_connection() {
        let db = Database::open_in_memory().unwrap();
        let other = db.clone();

        assert!(Arc::ptr_eq(&db.app_conn, &other.app_conn));
    }
}
