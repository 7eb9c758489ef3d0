//! SQLite snapshot backend.
//!
//! Persists the working set into a local SQLite database, opened per
//! operation on a blocking thread. Saves replace the whole working set in
//! one transaction, which is what makes them atomic from the store's point
//! of view.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::Connection;
use tokio::task;

use super::{StateBackend, StateSnapshot};
use crate::error::{DatabaseResultExt, Result, StoreError};

mod migrations;
mod queries;

/// Snapshot backend over a SQLite database file.
pub struct SqliteBackend {
    db_path: PathBuf,
}

impl SqliteBackend {
    /// Creates a backend for the given database path. The file and schema
    /// are created lazily by [`prepare`](Self::prepare) or the first
    /// operation.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            db_path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Creates parent directories and initializes the schema.
    pub async fn prepare(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path)?;
            Ok::<(), StoreError>(())
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

#[async_trait]
impl StateBackend for SqliteBackend {
    async fn load_state(&self) -> Result<StateSnapshot> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.load_snapshot()
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    async fn save_state(&self, snapshot: &StateSnapshot) -> Result<()> {
        let db_path = self.db_path.clone();
        let snapshot = snapshot.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_snapshot(&snapshot)
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Database connection and operations handler.
pub(crate) struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
