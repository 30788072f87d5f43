//! Transportation, lodging and activity record queries.
//!
//! Each kind lives in its own table with its own column names; the methods
//! here take and return [`ActivityRecord`] so callers never branch on kind.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{
    address_column, address_json, decimal_column, id_column, optional_id_column, parsed_column,
    table_for, timestamp_column,
};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::{Activity, ActivityKind, ActivityRecord, ActivityRef, Lodging, Transportation},
};

const TRANSPORTATION_COLUMNS: &str = "id, trip_id, name, transportation_type, start_at, start_tz_id, end_at, end_tz_id, cost, payment_status, confirmation, notes, organization_id";
const LODGING_COLUMNS: &str = "id, trip_id, name, check_in_at, check_in_tz_id, check_out_at, check_out_tz_id, cost, payment_status, reservation, notes, organization_id, custom_location_name, custom_address, hide_location";
const ACTIVITY_COLUMNS: &str = "id, trip_id, name, start_at, start_tz_id, end_at, end_tz_id, cost, payment_status, reservation, notes, organization_id, custom_location_name, custom_address, hide_location";

const INSERT_TRANSPORTATION_SQL: &str = "INSERT INTO transportation (trip_id, name, transportation_type, start_at, start_tz_id, end_at, end_tz_id, cost, payment_status, confirmation, notes, organization_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const INSERT_LODGING_SQL: &str = "INSERT INTO lodging (trip_id, name, check_in_at, check_in_tz_id, check_out_at, check_out_tz_id, cost, payment_status, reservation, notes, organization_id, custom_location_name, custom_address, hide_location) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)";
const INSERT_ACTIVITY_SQL: &str = "INSERT INTO activities (trip_id, name, start_at, start_tz_id, end_at, end_tz_id, cost, payment_status, reservation, notes, organization_id, custom_location_name, custom_address, hide_location) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)";

const UPDATE_TRANSPORTATION_SQL: &str = "UPDATE transportation SET name = ?1, transportation_type = ?2, start_at = ?3, start_tz_id = ?4, end_at = ?5, end_tz_id = ?6, cost = ?7, payment_status = ?8, confirmation = ?9, notes = ?10, organization_id = ?11 WHERE id = ?12";
const UPDATE_LODGING_SQL: &str = "UPDATE lodging SET name = ?1, check_in_at = ?2, check_in_tz_id = ?3, check_out_at = ?4, check_out_tz_id = ?5, cost = ?6, payment_status = ?7, reservation = ?8, notes = ?9, organization_id = ?10, custom_location_name = ?11, custom_address = ?12, hide_location = ?13 WHERE id = ?14";
const UPDATE_ACTIVITY_SQL: &str = "UPDATE activities SET name = ?1, start_at = ?2, start_tz_id = ?3, end_at = ?4, end_tz_id = ?5, cost = ?6, payment_status = ?7, reservation = ?8, notes = ?9, organization_id = ?10, custom_location_name = ?11, custom_address = ?12, hide_location = ?13 WHERE id = ?14";

const DELETE_OWNER_ATTACHMENTS_SQL: &str =
    "DELETE FROM attachments WHERE owner_kind = ?1 AND owner_id = ?2";

fn columns_for(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Transportation => TRANSPORTATION_COLUMNS,
        ActivityKind::Lodging => LODGING_COLUMNS,
        ActivityKind::Activity => ACTIVITY_COLUMNS,
    }
}

fn trip_records_sql(kind: ActivityKind) -> String {
    format!(
        "SELECT {} FROM {} WHERE trip_id = ?1 ORDER BY id",
        columns_for(kind),
        table_for(kind)
    )
}

impl super::Database {
    fn build_transportation_from_row(row: &Row) -> rusqlite::Result<Transportation> {
        Ok(Transportation {
            id: id_column(row, 0)?,
            trip_id: id_column(row, 1)?,
            name: row.get(2)?,
            transportation_type: parsed_column(row, 3)?,
            start: timestamp_column(row, 4)?,
            start_tz_id: row.get(5)?,
            end: timestamp_column(row, 6)?,
            end_tz_id: row.get(7)?,
            cost: decimal_column(row, 8)?,
            payment_status: parsed_column(row, 9)?,
            confirmation: row.get(10)?,
            notes: row.get(11)?,
            organization_id: optional_id_column(row, 12)?,
            attachments: Vec::new(),
        })
    }

    fn build_lodging_from_row(row: &Row) -> rusqlite::Result<Lodging> {
        Ok(Lodging {
            id: id_column(row, 0)?,
            trip_id: id_column(row, 1)?,
            name: row.get(2)?,
            start: timestamp_column(row, 3)?,
            check_in_tz_id: row.get(4)?,
            end: timestamp_column(row, 5)?,
            check_out_tz_id: row.get(6)?,
            cost: decimal_column(row, 7)?,
            payment_status: parsed_column(row, 8)?,
            reservation: row.get(9)?,
            notes: row.get(10)?,
            organization_id: optional_id_column(row, 11)?,
            custom_location_name: row.get(12)?,
            custom_address: address_column(row, 13)?,
            hide_location: row.get(14)?,
            attachments: Vec::new(),
        })
    }

    fn build_activity_from_row(row: &Row) -> rusqlite::Result<Activity> {
        Ok(Activity {
            id: id_column(row, 0)?,
            trip_id: id_column(row, 1)?,
            name: row.get(2)?,
            start: timestamp_column(row, 3)?,
            start_tz_id: row.get(4)?,
            end: timestamp_column(row, 5)?,
            end_tz_id: row.get(6)?,
            cost: decimal_column(row, 7)?,
            payment_status: parsed_column(row, 8)?,
            reservation: row.get(9)?,
            notes: row.get(10)?,
            organization_id: optional_id_column(row, 11)?,
            custom_location_name: row.get(12)?,
            custom_address: address_column(row, 13)?,
            hide_location: row.get(14)?,
            attachments: Vec::new(),
        })
    }

    fn query_records<F>(
        &self,
        kind: ActivityKind,
        trip_id: u64,
        build: F,
    ) -> Result<Vec<ActivityRecord>>
    where
        F: FnMut(&Row) -> rusqlite::Result<ActivityRecord>,
    {
        let sql = trip_records_sql(kind);
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let mut records = stmt
            .query_map(params![trip_id as i64], build)
            .db_context("Failed to query records")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect records")?;

        for record in &mut records {
            *record.attachments_mut() = self.attachments_for(record.reference())?;
        }
        Ok(records)
    }

    /// Stores a new record and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// `TripNotFound` if the record's trip does not exist and
    /// `OrganizationNotFound` if it references a missing organization.
    pub fn insert_activity(&mut self, record: &ActivityRecord) -> Result<ActivityRecord> {
        let activity = record.as_activity();
        if !self.trip_exists(activity.trip_id())? {
            return Err(ItineraryError::TripNotFound {
                id: activity.trip_id(),
            });
        }
        if let Some(org_id) = activity.organization_id() {
            if !self.organization_exists(org_id)? {
                return Err(ItineraryError::OrganizationNotFound { id: org_id });
            }
        }

        let inserted = match record {
            ActivityRecord::Transportation(t) => self.connection.execute(
                INSERT_TRANSPORTATION_SQL,
                params![
                    t.trip_id as i64,
                    t.name,
                    t.transportation_type.as_str(),
                    t.start.to_string(),
                    t.start_tz_id,
                    t.end.to_string(),
                    t.end_tz_id,
                    t.cost.to_string(),
                    t.payment_status.as_str(),
                    t.confirmation,
                    t.notes,
                    t.organization_id.map(|id| id as i64),
                ],
            ),
            ActivityRecord::Lodging(l) => self.connection.execute(
                INSERT_LODGING_SQL,
                params![
                    l.trip_id as i64,
                    l.name,
                    l.start.to_string(),
                    l.check_in_tz_id,
                    l.end.to_string(),
                    l.check_out_tz_id,
                    l.cost.to_string(),
                    l.payment_status.as_str(),
                    l.reservation,
                    l.notes,
                    l.organization_id.map(|id| id as i64),
                    l.custom_location_name,
                    address_json(l.custom_address.as_ref())?,
                    l.hide_location,
                ],
            ),
            ActivityRecord::Activity(a) => self.connection.execute(
                INSERT_ACTIVITY_SQL,
                params![
                    a.trip_id as i64,
                    a.name,
                    a.start.to_string(),
                    a.start_tz_id,
                    a.end.to_string(),
                    a.end_tz_id,
                    a.cost.to_string(),
                    a.payment_status.as_str(),
                    a.reservation,
                    a.notes,
                    a.organization_id.map(|id| id as i64),
                    a.custom_location_name,
                    address_json(a.custom_address.as_ref())?,
                    a.hide_location,
                ],
            ),
        };
        inserted.db_context("Failed to insert record")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted {} {id}", record.kind().as_str());

        let mut stored = record.clone();
        stored.set_id(id);
        stored.attachments_mut().clear();
        Ok(stored)
    }

    /// Retrieves one record with its attachments.
    pub fn get_activity(&self, reference: ActivityRef) -> Result<Option<ActivityRecord>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            columns_for(reference.kind),
            table_for(reference.kind)
        );
        let id = reference.id as i64;

        let record = match reference.kind {
            ActivityKind::Transportation => self.connection.query_row(&sql, params![id], |row| {
                Self::build_transportation_from_row(row).map(ActivityRecord::from)
            }),
            ActivityKind::Lodging => self.connection.query_row(&sql, params![id], |row| {
                Self::build_lodging_from_row(row).map(ActivityRecord::from)
            }),
            ActivityKind::Activity => self.connection.query_row(&sql, params![id], |row| {
                Self::build_activity_from_row(row).map(ActivityRecord::from)
            }),
        }
        .optional()
        .db_context("Failed to query record")?;

        match record {
            Some(mut record) => {
                *record.attachments_mut() = self.attachments_for(reference)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Every record of a trip, grouped by kind and in insertion order.
    pub fn activities_for_trip(&self, trip_id: u64) -> Result<Vec<ActivityRecord>> {
        let mut records = self.query_records(ActivityKind::Transportation, trip_id, |row| {
            Self::build_transportation_from_row(row).map(ActivityRecord::from)
        })?;
        records.extend(self.query_records(ActivityKind::Lodging, trip_id, |row| {
            Self::build_lodging_from_row(row).map(ActivityRecord::from)
        })?);
        records.extend(self.query_records(ActivityKind::Activity, trip_id, |row| {
            Self::build_activity_from_row(row).map(ActivityRecord::from)
        })?);
        Ok(records)
    }

    /// Overwrites every editable column of a stored record.
    pub fn update_activity(&mut self, record: &ActivityRecord) -> Result<()> {
        if let Some(org_id) = record.as_activity().organization_id() {
            if !self.organization_exists(org_id)? {
                return Err(ItineraryError::OrganizationNotFound { id: org_id });
            }
        }

        let rows = match record {
            ActivityRecord::Transportation(t) => self.connection.execute(
                UPDATE_TRANSPORTATION_SQL,
                params![
                    t.name,
                    t.transportation_type.as_str(),
                    t.start.to_string(),
                    t.start_tz_id,
                    t.end.to_string(),
                    t.end_tz_id,
                    t.cost.to_string(),
                    t.payment_status.as_str(),
                    t.confirmation,
                    t.notes,
                    t.organization_id.map(|id| id as i64),
                    t.id as i64,
                ],
            ),
            ActivityRecord::Lodging(l) => self.connection.execute(
                UPDATE_LODGING_SQL,
                params![
                    l.name,
                    l.start.to_string(),
                    l.check_in_tz_id,
                    l.end.to_string(),
                    l.check_out_tz_id,
                    l.cost.to_string(),
                    l.payment_status.as_str(),
                    l.reservation,
                    l.notes,
                    l.organization_id.map(|id| id as i64),
                    l.custom_location_name,
                    address_json(l.custom_address.as_ref())?,
                    l.hide_location,
                    l.id as i64,
                ],
            ),
            ActivityRecord::Activity(a) => self.connection.execute(
                UPDATE_ACTIVITY_SQL,
                params![
                    a.name,
                    a.start.to_string(),
                    a.start_tz_id,
                    a.end.to_string(),
                    a.end_tz_id,
                    a.cost.to_string(),
                    a.payment_status.as_str(),
                    a.reservation,
                    a.notes,
                    a.organization_id.map(|id| id as i64),
                    a.custom_location_name,
                    address_json(a.custom_address.as_ref())?,
                    a.hide_location,
                    a.id as i64,
                ],
            ),
        }
        .db_context("Failed to update record")?;

        if rows == 0 {
            return Err(ItineraryError::ActivityNotFound {
                kind: record.kind().label().to_string(),
                id: record.id(),
            });
        }
        Ok(())
    }

    pub fn activity_exists(&self, reference: ActivityRef) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)",
            table_for(reference.kind)
        );
        self.connection
            .query_row(&sql, params![reference.id as i64], |row| row.get(0))
            .db_context("Failed to check record existence")
    }

    /// Deletes a record and its attachments. Returns false if the record did
    /// not exist.
    pub fn delete_activity(&mut self, reference: ActivityRef) -> Result<bool> {
        let delete_sql = format!("DELETE FROM {} WHERE id = ?1", table_for(reference.kind));

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            DELETE_OWNER_ATTACHMENTS_SQL,
            params![reference.kind.as_str(), reference.id as i64],
        )
        .db_context("Failed to delete attachments")?;
        let rows = tx
            .execute(&delete_sql, params![reference.id as i64])
            .db_context("Failed to delete record")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Deleted {reference} ({rows} row)");
        Ok(rows > 0)
    }
}
