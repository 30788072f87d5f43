use itinerary_core::{Itinerary, ItineraryBuilder};
use jiff::{tz::TimeZone, Timestamp};
use tempfile::TempDir;

/// Helper function to create a test itinerary with a UTC calendar
pub async fn create_test_itinerary() -> (TempDir, Itinerary) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let itinerary = ItineraryBuilder::new()
        .with_database_path(Some(&db_path))
        .with_calendar(TimeZone::UTC)
        .build()
        .await
        .expect("Failed to create itinerary");
    (temp_dir, itinerary)
}

#[allow(dead_code)]
pub fn ts(s: &str) -> Timestamp {
    s.parse().expect("Invalid timestamp")
}
