//! Persisted client-side key/value storage, used to keep the access token between runs.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, OptionalExtension};

use crate::Error;

/// A handle to the storage that can be shared between the components of the client.
pub type SharedStorage = Arc<dyn Storage>;

/// The storage key under which the access token is persisted.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// A durable string key/value store.
///
/// Implementations are shared between the session and the HTTP client, see [SharedStorage].
pub trait Storage: Send + Sync {
    /// Get the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns an error if the underlying store could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    /// Returns an error if the underlying store could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error if the underlying store could not be written.
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// Storage backed by a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Open (or create) the storage database at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(path: &Path) -> Result<Self, Error> {
        Self::new(Connection::open(path)?)
    }

    /// Create a storage that lives only as long as the process.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, creating the storage table if needed.
    ///
    /// # Errors
    /// Returns an error if the storage table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_storage_table(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}

fn create_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let connection = self.connection.lock().map_err(|_| Error::StorageLock)?;

        connection
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                (key,),
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let connection = self.connection.lock().map_err(|_| Error::StorageLock)?;

        connection.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let connection = self.connection.lock().map_err(|_| Error::StorageLock)?;

        connection.execute("DELETE FROM local_storage WHERE key = ?1", (key,))?;

        Ok(())
    }
}

/// Storage kept in a hash map, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let values = self.values.lock().map_err(|_| Error::StorageLock)?;

        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut values = self.values.lock().map_err(|_| Error::StorageLock)?;
        values.insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut values = self.values.lock().map_err(|_| Error::StorageLock)?;
        values.remove(key);

        Ok(())
    }
}
