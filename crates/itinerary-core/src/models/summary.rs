//! Trip summary used by trip lists.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DaySpan, Trip};

/// Compact view of a trip with derived activity statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    /// Trip ID
    pub id: u64,
    /// Name of the trip
    pub name: String,
    /// Declared start, if set
    pub start_date: Option<Timestamp>,
    /// Declared end, if set
    pub end_date: Option<Timestamp>,
    /// Whether the trip is protected
    pub is_protected: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of transportation, lodging and activity records
    pub activity_count: usize,
    /// Sum of every record's cost
    pub total_cost: Decimal,
    /// Days covered by the records
    pub activity_days: Option<DaySpan>,
}

impl From<&Trip> for TripSummary {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            name: trip.name.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            is_protected: trip.is_protected,
            created_at: trip.created_at,
            activity_count: trip.total_activity_count(),
            total_cost: trip.total_cost(),
            activity_days: trip.cached_date_span(),
        }
    }
}
