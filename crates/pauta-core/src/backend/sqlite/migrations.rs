//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, StoreError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if the observacoes column exists in calendar_posts
        let has_notes_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('calendar_posts') WHERE name = 'observacoes'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        // Add observacoes column if it doesn't exist
        if !has_notes_column {
            self.connection
                .execute("ALTER TABLE calendar_posts ADD COLUMN observacoes TEXT", [])
                .map_err(|e| {
                    StoreError::database_error(
                        "Failed to add observacoes column to calendar_posts table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
