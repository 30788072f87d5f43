//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Organization, TripSummary};

/// Newtype wrapper for displaying a list of trip summaries.
///
/// # Examples
///
/// ```rust
/// use itinerary_core::{display::TripSummaries, models::TripSummary};
/// use jiff::Timestamp;
/// use rust_decimal::Decimal;
///
/// let summary = TripSummary {
///     id: 1,
///     name: "Lisbon".to_string(),
///     start_date: None,
///     end_date: None,
///     is_protected: false,
///     created_at: Timestamp::now(),
///     activity_count: 0,
///     total_cost: Decimal::ZERO,
///     activity_days: None,
/// };
///
/// let output = TripSummaries(vec![summary]).to_string();
/// assert!(output.contains("## Lisbon (ID: 1)"));
/// ```
pub struct TripSummaries(pub Vec<TripSummary>);

impl TripSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripSummary> {
        self.0.iter()
    }
}

impl IntoIterator for TripSummaries {
    type Item = TripSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for TripSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trips found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of organizations.
pub struct Organizations(pub Vec<Organization>);

impl Organizations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Organizations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No organizations found.");
        }
        for organization in &self.0 {
            write!(f, "{organization}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collections() {
        assert_eq!(TripSummaries(vec![]).to_string(), "No trips found.\n");
        assert_eq!(
            Organizations(vec![]).to_string(),
            "No organizations found.\n"
        );
    }
}
