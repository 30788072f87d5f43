//! High-level itinerary API for managing trips and their records.
//!
//! [`Itinerary`] is the service facade used by front ends. Every method is
//! async and runs its SQLite work on a blocking thread. Activity mutations
//! load the owning [`Trip`](crate::models::Trip) and go through its mutation
//! methods, so the date-conflict check always sees the trip as it will be
//! after the change.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Itinerary    │    │      Trip       │    │    Database     │
//! │ (trip_ops,      │───▶│ (aggregate,     │    │   (via db/)     │
//! │  activity_ops)  │───────────────────────────▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Itinerary`] instances
//! - [`trip_ops`]: Trip create, list, update, dates and delete
//! - [`activity_ops`]: Add, edit, show and delete activity records
//! - [`organization_ops`]: Organization directory
//! - [`attachment_ops`]: Files attached to activity records
//!
//! # Examples
//!
//! ```rust
//! use itinerary_core::{params::CreateTrip, ItineraryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let itinerary = ItineraryBuilder::new()
//!     .with_database_path(Some("/tmp/itinerary-example.db"))
//!     .build()
//!     .await?;
//!
//! let trip = itinerary
//!     .create_trip(&CreateTrip {
//!         name: "Lisbon".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{trip}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::Serialize;
use tokio::task;

use crate::{
    db::Database,
    error::{ItineraryError, Result},
    models::{ActivityRecord, ConflictReport, Trip},
};

pub mod activity_ops;
pub mod attachment_ops;
pub mod builder;
pub mod organization_ops;
pub mod trip_ops;


pub use builder::ItineraryBuilder;

/// Main interface for managing trips, records, organizations and
/// attachments.
pub struct Itinerary {
    pub(crate) db_path: PathBuf,
    pub(crate) calendar: TimeZone,
}

/// Outcome of changing a trip's dates.
#[derive(Debug, Clone, Serialize)]
pub struct DateChange {
    pub trip: Trip,
    /// Advisory: the new dates do not cover the trip's records
    pub conflicts: Option<ConflictReport>,
}

/// Outcome of adding or editing an activity record.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityChange {
    pub activity: ActivityRecord,
    /// Advisory: the trip's own dates no longer cover its records
    pub conflicts: Option<ConflictReport>,
}

impl Itinerary {
    pub(crate) fn new(db_path: PathBuf, calendar: TimeZone) -> Self {
        Self { db_path, calendar }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Calendar used for day truncation on every loaded trip.
    pub fn calendar(&self) -> &TimeZone {
        &self.calendar
    }

    /// Open the database on a blocking thread and run `op` against it.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database, &TimeZone) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let calendar = self.calendar.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db, &calendar)
        })
        .await
        .map_err(ItineraryError::join)?
    }
}

/// Load a trip and switch it to `calendar`.
pub(crate) fn load_trip(db: &Database, id: u64, calendar: &TimeZone) -> Result<Trip> {
    let mut trip = db.get_trip(id)?.ok_or(ItineraryError::TripNotFound { id })?;
    trip.set_calendar(calendar.clone());
    Ok(trip)
}
