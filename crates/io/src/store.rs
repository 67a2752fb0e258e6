// Durable key-value store backed by SQLite

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Failure while opening or using the store.
#[derive(Debug)]
pub enum StoreError {
    /// The backing database rejected an operation.
    Database(rusqlite::Error),
    /// A stored value could not be decoded.
    Decode(serde_json::Error),
    /// The store file's directory could not be created.
    Io(std::io::Error),
    /// No per-user data directory could be resolved.
    NoDataDir,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "store database error: {}", e),
            StoreError::Decode(e) => write!(f, "stored value is not valid grid JSON: {}", e),
            StoreError::Io(e) => write!(f, "store path error: {}", e),
            StoreError::NoDataDir => write!(f, "no user data directory available for the store"),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Decode(e)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Local durable storage: string keys to string values, one row per key,
/// writes replace wholesale.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open a store at `path`, creating the file and schema if needed.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Open the per-user default store, creating its directory if needed.
    pub fn open_default() -> Result<Self, StoreError> {
        let path = Self::default_path().ok_or(StoreError::NoDataDir)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        Self::open(&path)
    }

    /// Default on-disk location: `<user data dir>/restock/store.db`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("restock").join("store.db"))
    }

    /// Fetch the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Store `value` under `key`, replacing any existing value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
