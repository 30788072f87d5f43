//! Activity record operations for the Itinerary.
//!
//! Adds and edits load the owning trip, apply the change through the trip's
//! own mutation methods and report conflicts against the trip's declared
//! dates. Conflicts never block a save.

use jiff::tz::TimeZone;
use log::{info, warn};

use super::{load_trip, trip_ops::validate_name, ActivityChange, Itinerary};
use crate::{
    error::{ItineraryError, Result},
    models::{ActivityRecord, ActivityRef, EditSnapshot},
    params::{AddActivity, EditActivity},
};

impl Itinerary {
    /// Adds a record to a trip.
    ///
    /// # Errors
    ///
    /// `TripNotFound`, `OrganizationNotFound`, or `InvalidInput` when the
    /// record fails validation.
    pub async fn add_activity(&self, params: &AddActivity) -> Result<ActivityChange> {
        let snapshot = params.to_snapshot();
        validate_snapshot(&snapshot)?;
        let trip_id = params.trip_id;

        let change = self
            .with_database(move |db, calendar| {
                let mut trip = load_trip(db, trip_id, calendar)?;
                let record = ActivityRecord::from_snapshot(trip_id, &snapshot);
                let stored = db.insert_activity(&record)?;
                trip.add_activity(stored.clone());
                Ok(ActivityChange {
                    activity: stored,
                    conflicts: trip.current_date_conflicts(),
                })
            })
            .await?;

        info!("Added {} to trip {trip_id}", change.activity.reference());
        warn_on_conflicts(&change);
        Ok(change)
    }

    /// Retrieves one record with its attachments.
    pub async fn get_activity(&self, reference: ActivityRef) -> Result<Option<ActivityRecord>> {
        self.with_database(move |db, _| db.get_activity(reference))
            .await
    }

    /// Edits a record through a copy-modify-apply session.
    pub async fn edit_activity(&self, params: &EditActivity) -> Result<ActivityChange> {
        let params = params.clone();
        let reference = params.target;

        let change = self
            .with_database(move |db, calendar| {
                let mut record = db
                    .get_activity(reference)?
                    .ok_or_else(|| not_found(reference))?;

                let mut snapshot = record.as_activity().copy_for_editing();
                params.apply_to(&mut snapshot);
                validate_snapshot(&snapshot)?;
                record.as_activity_mut().apply_edits(&snapshot);

                db.update_activity(&record)?;

                let mut trip = load_trip(db, record.as_activity().trip_id(), calendar)?;
                trip.replace_activity(record.clone());
                Ok(ActivityChange {
                    activity: record,
                    conflicts: trip.current_date_conflicts(),
                })
            })
            .await?;

        info!("Edited {reference}");
        warn_on_conflicts(&change);
        Ok(change)
    }

    /// Deletes a record and its attachments, returning what was deleted.
    pub async fn delete_activity(&self, reference: ActivityRef) -> Result<ActivityRecord> {
        let record = self
            .with_database(move |db, _| {
                let record = db
                    .get_activity(reference)?
                    .ok_or_else(|| not_found(reference))?;
                if !db.delete_activity(reference)? {
                    return Err(not_found(reference));
                }
                Ok(record)
            })
            .await?;

        info!(
            "Deleted {reference} with {} attachments",
            record.as_activity().attachments().len()
        );
        Ok(record)
    }
}

pub(crate) fn not_found(reference: ActivityRef) -> ItineraryError {
    ItineraryError::ActivityNotFound {
        kind: reference.kind.label().to_string(),
        id: reference.id,
    }
}

fn warn_on_conflicts(change: &ActivityChange) {
    if let Some(report) = &change.conflicts {
        warn!(
            "Trip {} dates no longer cover its records after {}: {report}",
            change.activity.as_activity().trip_id(),
            change.activity.reference()
        );
    }
}

/// Reject snapshots that cannot be saved: a blank name, a negative cost or
/// an unknown time zone.
fn validate_snapshot(snapshot: &EditSnapshot) -> Result<()> {
    validate_name(&snapshot.name)?;
    if snapshot.cost.is_sign_negative() && !snapshot.cost.is_zero() {
        return Err(ItineraryError::invalid_input("cost").with_reason("must not be negative"));
    }
    for (field, tz_id) in [
        ("start_tz_id", &snapshot.start_tz_id),
        ("end_tz_id", &snapshot.end_tz_id),
    ] {
        if let Some(tz_id) = tz_id {
            TimeZone::get(tz_id).map_err(|e| {
                ItineraryError::invalid_input(field).with_reason(e.to_string())
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::ActivityKind;

    #[test]
    fn test_validate_snapshot_rejects_bad_input() {
        let mut snapshot = EditSnapshot::blank(ActivityKind::Activity);
        assert!(validate_snapshot(&snapshot).is_err());

        snapshot.name = "Museum".to_string();
        assert!(validate_snapshot(&snapshot).is_ok());

        snapshot.cost = Decimal::new(-100, 2);
        assert!(validate_snapshot(&snapshot).is_err());

        snapshot.cost = Decimal::ZERO;
        snapshot.start_tz_id = Some("Mars/Olympus_Mons".to_string());
        assert!(validate_snapshot(&snapshot).is_err());

        snapshot.start_tz_id = Some("Europe/Lisbon".to_string());
        assert!(validate_snapshot(&snapshot).is_ok());
    }
}
