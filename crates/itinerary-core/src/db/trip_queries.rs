//! Trip CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension};

use super::utils::{optional_timestamp_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::Trip,
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (name, notes, start_date, end_date, is_protected, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TRIP_SQL: &str = "SELECT id, name, notes, start_date, end_date, is_protected, created_at FROM trips WHERE id = ?1";
const SELECT_TRIPS_SQL: &str = "SELECT id, name, notes, start_date, end_date, is_protected, created_at FROM trips ORDER BY created_at DESC, id DESC";
const UPDATE_TRIP_SQL: &str =
    "UPDATE trips SET name = ?1, notes = ?2, is_protected = ?3 WHERE id = ?4";
const UPDATE_TRIP_DATES_SQL: &str = "UPDATE trips SET start_date = ?1, end_date = ?2 WHERE id = ?3";
const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";
const DELETE_TRIP_ATTACHMENTS_SQL: &str = "DELETE FROM attachments WHERE \
     (owner_kind = 'transportation' AND owner_id IN (SELECT id FROM transportation WHERE trip_id = ?1)) \
     OR (owner_kind = 'lodging' AND owner_id IN (SELECT id FROM lodging WHERE trip_id = ?1)) \
     OR (owner_kind = 'activity' AND owner_id IN (SELECT id FROM activities WHERE trip_id = ?1))";
const DELETE_TRIP_TRANSPORTATION_SQL: &str = "DELETE FROM transportation WHERE trip_id = ?1";
const DELETE_TRIP_LODGING_SQL: &str = "DELETE FROM lodging WHERE trip_id = ?1";
const DELETE_TRIP_ACTIVITIES_SQL: &str = "DELETE FROM activities WHERE trip_id = ?1";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Trip (without records) from a database
    /// row
    fn build_trip_from_row(row: &rusqlite::Row) -> rusqlite::Result<Trip> {
        let mut trip = Trip::new(
            row.get::<_, i64>(0)? as u64,
            row.get::<_, String>(1)?,
            timestamp_column(row, 6)?,
        );
        trip.notes = row.get(2)?;
        trip.set_dates(
            optional_timestamp_column(row, 3)?,
            optional_timestamp_column(row, 4)?,
        );
        trip.is_protected = row.get(5)?;
        Ok(trip)
    }

    /// Creates a new trip with no records.
    pub fn create_trip(
        &mut self,
        name: &str,
        notes: &str,
        start_date: Option<Timestamp>,
        end_date: Option<Timestamp>,
    ) -> Result<Trip> {
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_TRIP_SQL,
                params![
                    name,
                    notes,
                    start_date.map(|t| t.to_string()),
                    end_date.map(|t| t.to_string()),
                    false,
                    now.to_string()
                ],
            )
            .db_context("Failed to insert trip")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted trip {id}");

        let mut trip = Trip::new(id, name, now);
        trip.notes = notes.to_string();
        trip.set_dates(start_date, end_date);
        Ok(trip)
    }

    /// Retrieves a trip by its ID with every record and attachment loaded.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        let trip = stmt
            .query_row(params![id as i64], Self::build_trip_from_row)
            .optional()
            .db_context("Failed to query trip")?;

        match trip {
            Some(mut trip) => {
                self.load_records(&mut trip)?;
                Ok(Some(trip))
            }
            None => Ok(None),
        }
    }

    /// Lists every trip, newest first, with records loaded.
    pub fn list_trips(&self) -> Result<Vec<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIPS_SQL)
            .db_context("Failed to prepare query")?;

        let mut trips = stmt
            .query_map([], Self::build_trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect trips")?;

        for trip in &mut trips {
            self.load_records(trip)?;
        }
        Ok(trips)
    }

    /// Overwrites a trip's name, notes and protection flag.
    pub fn update_trip(
        &mut self,
        id: u64,
        name: &str,
        notes: &str,
        is_protected: bool,
    ) -> Result<()> {
        let rows = self
            .connection
            .execute(
                UPDATE_TRIP_SQL,
                params![name, notes, is_protected, id as i64],
            )
            .db_context("Failed to update trip")?;

        if rows == 0 {
            return Err(ItineraryError::TripNotFound { id });
        }
        Ok(())
    }

    /// Replaces a trip's declared dates. `None` clears a side.
    pub fn set_trip_dates(
        &mut self,
        id: u64,
        start_date: Option<Timestamp>,
        end_date: Option<Timestamp>,
    ) -> Result<()> {
        let rows = self
            .connection
            .execute(
                UPDATE_TRIP_DATES_SQL,
                params![
                    start_date.map(|t| t.to_string()),
                    end_date.map(|t| t.to_string()),
                    id as i64
                ],
            )
            .db_context("Failed to update trip dates")?;

        if rows == 0 {
            return Err(ItineraryError::TripNotFound { id });
        }
        Ok(())
    }

    pub fn trip_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_TRIP_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check trip existence")
    }

    /// Deletes a trip together with its records and their attachments.
    /// Returns false if the trip did not exist.
    pub fn delete_trip(&mut self, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_TRIP_ATTACHMENTS_SQL, params![id as i64])
            .db_context("Failed to delete trip attachments")?;
        for sql in [
            DELETE_TRIP_TRANSPORTATION_SQL,
            DELETE_TRIP_LODGING_SQL,
            DELETE_TRIP_ACTIVITIES_SQL,
        ] {
            tx.execute(sql, params![id as i64])
                .db_context("Failed to delete trip records")?;
        }
        let rows = tx
            .execute(DELETE_TRIP_SQL, params![id as i64])
            .db_context("Failed to delete trip")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Deleted trip {id} ({rows} row)");
        Ok(rows > 0)
    }

    fn load_records(&self, trip: &mut Trip) -> Result<()> {
        for record in self.activities_for_trip(trip.id)? {
            trip.add_activity(record);
        }
        Ok(())
    }
}
