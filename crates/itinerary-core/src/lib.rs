//! Core library for the itinerary trip planner.
//!
//! A [`Trip`] owns its transportation, lodging and activity records and
//! answers questions about them: total cost, the span of days they cover and
//! whether the trip's own dates leave any of them out. Around that aggregate
//! the crate provides SQLite storage ([`db`]), an async service facade
//! ([`Itinerary`]) and markdown display formatting ([`display`]).
//!
//! # Quick Start
//!
//! ```rust
//! use itinerary_core::{
//!     models::ActivityKind,
//!     params::{AddActivity, CreateTrip},
//!     ItineraryBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let itinerary = ItineraryBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let trip = itinerary
//!     .create_trip(&CreateTrip {
//!         name: "Lisbon".to_string(),
//!         start_date: Some("2024-05-03T00:00:00Z".parse()?),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let change = itinerary
//!     .add_activity(&AddActivity::new(
//!         trip.id,
//!         ActivityKind::Activity,
//!         "Tram 28",
//!         "2024-05-02T09:00:00Z".parse()?,
//!         "2024-05-02T11:00:00Z".parse()?,
//!     ))
//!     .await?;
//!
//! if let Some(report) = change.conflicts {
//!     println!("{report}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, Organizations, TripSummaries, UpdateResult,
};
pub use error::{ItineraryError, Result};
pub use itinerary::{ActivityChange, DateChange, Itinerary, ItineraryBuilder};
pub use models::{
    Activity, ActivityKind, ActivityRecord, ActivityRef, ConflictReport, DateConflict,
    EditSnapshot, Lodging, Organization, PaymentStatus, Transportation, TransportationType, Trip,
    TripActivity, TripSummary,
};
pub use params::{
    AddActivity, AttachFile, CheckTripDates, CreateOrganization, CreateTrip, DeleteTrip,
    EditActivity, ExportAttachment, Id, SetTripDates, UpdateTrip,
};
