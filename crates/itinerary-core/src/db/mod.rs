//! SQLite storage for trips, activity records, organizations and attachments.
//!
//! [`Database`] wraps a single `rusqlite` connection. Query methods are split
//! by table family across the submodules; each is an inherent method on
//! `Database`. Multi-row writes (deleting a trip, deleting an activity with
//! its attachments) run inside one transaction.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod activity_queries;
pub mod attachment_queries;
pub mod migrations;
pub mod organization_queries;
pub mod trip_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database at `path` and applies the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
