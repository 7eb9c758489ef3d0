//! Builder for creating and configuring PlanningStore instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::PlanningStore;
use crate::{
    backend::{SqliteBackend, StateBackend},
    error::{Result, StoreError},
};

/// Builder for creating and configuring PlanningStore instances.
#[derive(Default)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
    backend: Option<Arc<dyn StateBackend>>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path for the default SQLite backend.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pauta/pauta.db` or `~/.local/share/pauta/pauta.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Injects a custom persistence backend, overriding the SQLite default.
    pub fn with_backend(mut self, backend: Arc<dyn StateBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Builds the configured store instance and spawns its saver task.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the database path is invalid
    /// Returns `StoreError::Database` if database initialization fails
    pub async fn build(self) -> Result<PlanningStore> {
        let backend: Arc<dyn StateBackend> = match self.backend {
            Some(backend) => backend,
            None => {
                let db_path = if let Some(path) = self.database_path {
                    path
                } else {
                    Self::default_database_path()?
                };

                let sqlite = SqliteBackend::new(db_path);
                sqlite.prepare().await?;
                Arc::new(sqlite)
            }
        };

        Ok(PlanningStore::spawn(backend))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pauta")
            .place_data_file("pauta.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}
