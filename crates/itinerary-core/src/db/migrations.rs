//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Bring databases created before trip protection existed up to date.
    fn apply_migrations(&self) -> Result<()> {
        let has_protected_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('trips') WHERE name = 'is_protected'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect trips table")?;

        if !has_protected_column {
            debug!("Adding is_protected column to trips table");
            self.connection
                .execute(
                    "ALTER TABLE trips ADD COLUMN is_protected INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add is_protected column to trips table")?;
        }

        Ok(())
    }
}
