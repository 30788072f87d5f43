//! Trip operations for the Itinerary.

use jiff::Timestamp;
use log::{info, warn};

use super::{load_trip, DateChange, Itinerary};
use crate::{
    display::TripSummaries,
    error::{ItineraryError, Result},
    models::{ConflictReport, Trip, TripSummary},
    params::{CheckTripDates, CreateTrip, DeleteTrip, Id, SetTripDates, UpdateTrip},
};

impl Itinerary {
    /// Creates a new, empty trip.
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<Trip> {
        let name = validate_name(&params.name)?;
        validate_range(params.start_date, params.end_date)?;
        let notes = params.notes.clone().unwrap_or_default();
        let (start, end) = (params.start_date, params.end_date);

        let trip = self
            .with_database(move |db, calendar| {
                let trip = db.create_trip(&name, &notes, start, end)?;
                Ok(trip.with_calendar(calendar.clone()))
            })
            .await?;

        info!("Created trip {} ({})", trip.id, trip.name);
        Ok(trip)
    }

    /// Retrieves a trip with every record loaded.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let id = params.id;
        self.with_database(move |db, calendar| {
            let trip = db.get_trip(id)?;
            Ok(trip.map(|trip| trip.with_calendar(calendar.clone())))
        })
        .await
    }

    /// Lists every trip as a summary, newest first.
    pub async fn list_trips(&self) -> Result<TripSummaries> {
        self.with_database(|db, calendar| {
            let summaries = db
                .list_trips()?
                .into_iter()
                .map(|trip| TripSummary::from(&trip.with_calendar(calendar.clone())))
                .collect();
            Ok(TripSummaries(summaries))
        })
        .await
    }

    /// Updates a trip's name, notes or protection flag.
    pub async fn update_trip(&self, params: &UpdateTrip) -> Result<Trip> {
        let name = params.name.as_deref().map(validate_name).transpose()?;
        let params = params.clone();

        self.with_database(move |db, calendar| {
            let mut trip = load_trip(db, params.id, calendar)?;
            if let Some(name) = name {
                trip.name = name;
            }
            if let Some(notes) = params.notes {
                trip.notes = notes;
            }
            if let Some(is_protected) = params.is_protected {
                trip.is_protected = is_protected;
            }
            db.update_trip(trip.id, &trip.name, &trip.notes, trip.is_protected)?;
            Ok(trip)
        })
        .await
    }

    /// Replaces a trip's declared dates and reports any mismatch with its
    /// records. The change is saved either way.
    pub async fn set_trip_dates(&self, params: &SetTripDates) -> Result<DateChange> {
        validate_range(params.start_date, params.end_date)?;
        let (id, start, end) = (params.id, params.start_date, params.end_date);

        let change = self
            .with_database(move |db, calendar| {
                let mut trip = load_trip(db, id, calendar)?;
                let conflicts = trip.check_date_conflicts(start, end);
                db.set_trip_dates(id, start, end)?;
                trip.set_dates(start, end);
                Ok(DateChange { trip, conflicts })
            })
            .await?;

        if let Some(report) = &change.conflicts {
            warn!(
                "Trip {} dates conflict with its records: {report}",
                change.trip.id
            );
        }
        Ok(change)
    }

    /// Checks proposed dates against a trip's records without saving them.
    /// With no dates given, checks the trip's own dates.
    pub async fn check_trip_dates(
        &self,
        params: &CheckTripDates,
    ) -> Result<Option<ConflictReport>> {
        let (id, start, end) = (params.id, params.start_date, params.end_date);

        self.with_database(move |db, calendar| {
            let trip = load_trip(db, id, calendar)?;
            if start.is_none() && end.is_none() {
                Ok(trip.current_date_conflicts())
            } else {
                Ok(trip.check_date_conflicts(start, end))
            }
        })
        .await
    }

    /// Deletes a trip with all its records and attachments, returning what
    /// was deleted.
    ///
    /// # Errors
    ///
    /// `TripNotFound` if the trip does not exist and `InvalidInput` if it is
    /// protected and `force` is not set.
    pub async fn delete_trip(&self, params: &DeleteTrip) -> Result<Trip> {
        let (id, force) = (params.id, params.force);

        let trip = self
            .with_database(move |db, calendar| {
                let trip = load_trip(db, id, calendar)?;
                if trip.is_protected && !force {
                    return Err(ItineraryError::invalid_input("force")
                        .with_reason(format!("trip {id} is protected")));
                }
                if !db.delete_trip(id)? {
                    return Err(ItineraryError::TripNotFound { id });
                }
                Ok(trip)
            })
            .await?;

        info!(
            "Deleted trip {} with {} records",
            trip.id,
            trip.total_activity_count()
        );
        Ok(trip)
    }
}

pub(crate) fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ItineraryError::invalid_input("name").with_reason("must not be empty"));
    }
    Ok(name.to_string())
}

fn validate_range(start: Option<Timestamp>, end: Option<Timestamp>) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(ItineraryError::invalid_input("end_date")
                .with_reason(format!("{end} is before the start date {start}")));
        }
    }
    Ok(())
}
