//! Builder for creating and configuring Itinerary instances.

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use log::debug;
use tokio::task;

use super::Itinerary;
use crate::{
    db::Database,
    error::{ItineraryError, Result},
};

/// Builder for creating and configuring Itinerary instances.
#[derive(Debug, Clone)]
pub struct ItineraryBuilder {
    database_path: Option<PathBuf>,
    calendar: Option<TimeZone>,
}

impl ItineraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            calendar: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/itinerary/itinerary.db` or
    /// `~/.local/share/itinerary/itinerary.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the calendar used to truncate activity instants to days.
    /// Defaults to the system time zone.
    pub fn with_calendar(mut self, calendar: TimeZone) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Builds the configured itinerary instance.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::FileSystem` if the database directory cannot
    /// be created and `ItineraryError::Database` if schema setup fails.
    pub async fn build(self) -> Result<Itinerary> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ItineraryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ItineraryError>(())
        })
        .await
        .map_err(ItineraryError::join)??;

        debug!("Using database at {}", db_path.display());
        let calendar = self.calendar.unwrap_or_else(TimeZone::system);
        Ok(Itinerary::new(db_path, calendar))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("itinerary")
            .place_data_file("itinerary.db")
            .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
    }
}

impl Default for ItineraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
