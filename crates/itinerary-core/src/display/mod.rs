//! Display formatting for domain models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes use the wrapper types re-exported here.
//! Everything renders as markdown.
//!
//! - [`collections`]: `TripSummaries`, `Organizations`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: instant, day and duration formatting
//! - [`models`]: `Display` for trips, activities and organizations

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Organizations, TripSummaries};
pub use datetime::{HumanDuration, LocalDate, LocalDateTime, ZonedDateTime};
pub use models::ActivityDetail;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
