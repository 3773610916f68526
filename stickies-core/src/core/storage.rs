use crate::Result;
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;

/// Read/write contract over a keyed value store.
///
/// [`NoteStore`](crate::NoteStore) is injected with a boxed implementation,
/// so tests can run against [`MemoryStorage`] without a real persistence
/// backend.
pub trait Storage: Send {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value wholesale.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Durable storage backed by a single-table SQLite database.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens the store at `path`, creating the file and bootstrapping the
    /// schema if needed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StickiesError::Database`] if the file exists but is
    /// not a SQLite database, or for any other SQLite failure.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT value FROM kv WHERE key = ?",
            [key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?, ?)",
            [key, value],
        )?;
        Ok(())
    }
}

/// In-memory stand-in implementing the same read/write contract.
///
/// Nothing survives a drop; intended for tests and as a last-resort
/// fallback when no durable store can be opened.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_creates_schema() {
        let temp = NamedTempFile::new().unwrap();
        let storage = SqliteStorage::open(temp.path()).unwrap();

        let tables: Vec<String> = storage
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert!(tables.contains(&"kv".to_string()));
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let temp = NamedTempFile::new().unwrap();
        let storage = SqliteStorage::open(temp.path()).unwrap();
        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_wholesale() {
        let temp = NamedTempFile::new().unwrap();
        let mut storage = SqliteStorage::open(temp.path()).unwrap();

        storage.set("notes", "[1]").unwrap();
        storage.set("notes", "[1,2]").unwrap();
        assert_eq!(storage.get("notes").unwrap(), Some("[1,2]".to_string()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp = NamedTempFile::new().unwrap();
        {
            let mut storage = SqliteStorage::open(temp.path()).unwrap();
            storage.set("notes", "[]").unwrap();
        }

        let storage = SqliteStorage::open(temp.path()).unwrap();
        assert_eq!(storage.get("notes").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_open_invalid_file() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "not a database").unwrap();

        assert!(SqliteStorage::open(temp.path()).is_err());
    }

    #[test]
    fn test_memory_storage_contract() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("notes").unwrap(), None);

        storage.set("notes", "a").unwrap();
        storage.set("notes", "b").unwrap();
        assert_eq!(storage.get("notes").unwrap(), Some("b".to_string()));
    }
}
