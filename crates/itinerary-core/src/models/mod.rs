//! Domain models for trips and the records they own.
//!
//! - [`Trip`] is the aggregate. It owns three collections of activity records
//!   and derives cost totals, date spans and date-conflict reports from them.
//! - [`Transportation`], [`Lodging`] and [`Activity`] are the record variants,
//!   unified by the [`TripActivity`] trait and the [`ActivityRecord`] enum.
//! - [`EditSnapshot`] is the flat copy used by edit sessions.
//! - [`Organization`], [`Address`] and [`FileAttachment`] are the supporting
//!   records activities refer to.
//!
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use itinerary_core::models::{Activity, Trip};
//! use jiff::{civil::date, tz::TimeZone, Timestamp};
//!
//! let mut trip = Trip::new(1, "Lisbon", Timestamp::now()).with_calendar(TimeZone::UTC);
//! trip.add_activity(Activity::new(
//!     1,
//!     "Tram 28",
//!     "2024-05-02T09:00:00Z".parse().unwrap(),
//!     "2024-05-02T11:00:00Z".parse().unwrap(),
//! ));
//!
//! let span = trip.cached_date_span().unwrap();
//! assert_eq!(span.start, date(2024, 5, 2));
//!
//! let report = trip
//!     .check_date_conflicts(Some("2024-05-03T00:00:00Z".parse().unwrap()), None)
//!     .unwrap();
//! assert!(report.starts_too_late());
//! ```

pub mod activity;
pub mod conflict;
pub mod edit;
pub mod organization;
pub mod span;
pub mod status;
pub mod summary;
pub mod trip;

#[cfg(test)]
mod tests;

pub use activity::{Activity, ActivityRecord, ActivityRef, Lodging, Transportation, TripActivity};
pub use conflict::{ConflictReport, DateConflict};
pub use edit::EditSnapshot;
pub use organization::{Address, FileAttachment, Organization};
pub use span::{DateSpan, DaySpan};
pub use status::{ActivityKind, PaymentStatus, TransportationType};
pub use summary::TripSummary;
pub use trip::Trip;
