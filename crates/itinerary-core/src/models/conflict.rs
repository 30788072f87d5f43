//! Advisory report of mismatches between a trip's dates and its activities.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One side of a trip's date range that does not cover its activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateConflict {
    /// The trip starts on a later day than its first activity.
    StartsAfterActivities {
        trip_start: Date,
        first_activity: Date,
    },

    /// The trip ends on an earlier day than its last activity.
    EndsBeforeActivities { trip_end: Date, last_activity: Date },
}

impl fmt::Display for DateConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateConflict::StartsAfterActivities {
                trip_start,
                first_activity,
            } => write!(
                f,
                "Trip starts on {trip_start}, after its first activity begins on {first_activity}."
            ),
            DateConflict::EndsBeforeActivities {
                trip_end,
                last_activity,
            } => write!(
                f,
                "Trip ends on {trip_end}, before its last activity finishes on {last_activity}."
            ),
        }
    }
}

/// Non-empty list of [`DateConflict`]s.
///
/// Callers decide whether a report blocks a save; the aggregate never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    conflicts: Vec<DateConflict>,
}

impl ConflictReport {
    /// Wrap `conflicts`, or return `None` when there are none.
    pub fn from_conflicts(conflicts: Vec<DateConflict>) -> Option<Self> {
        if conflicts.is_empty() {
            None
        } else {
            Some(Self { conflicts })
        }
    }

    pub fn conflicts(&self) -> &[DateConflict] {
        &self.conflicts
    }

    pub fn starts_too_late(&self) -> bool {
        self.conflicts
            .iter()
            .any(|c| matches!(c, DateConflict::StartsAfterActivities { .. }))
    }

    pub fn ends_too_early(&self) -> bool {
        self.conflicts
            .iter()
            .any(|c| matches!(c, DateConflict::EndsBeforeActivities { .. }))
    }

    /// The combined human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conflict) in self.conflicts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{conflict}")?;
        }
        Ok(())
    }
}
