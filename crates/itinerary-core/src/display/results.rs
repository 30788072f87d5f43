//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::OperationStatus;
use crate::models::{ActivityRecord, ConflictReport, Organization, Trip};

/// Wrapper for the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ActivityRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created {} with ID: {}",
            self.resource.kind().as_str(),
            self.resource.id()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Organization> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created organization with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for the result of update operations, with an optional advisory
/// date-conflict report.
pub struct UpdateResult<T> {
    pub resource: T,
    pub conflicts: Option<ConflictReport>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            conflicts: None,
        }
    }

    pub fn with_conflicts(resource: T, conflicts: Option<ConflictReport>) -> Self {
        Self {
            resource,
            conflicts,
        }
    }

    fn fmt_conflicts(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(report) = &self.conflicts {
            writeln!(f)?;
            write!(f, "{}", OperationStatus::date_conflicts(report))?;
        }
        Ok(())
    }
}

impl fmt::Display for UpdateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated trip with ID: {}", self.resource.id)?;
        self.fmt_conflicts(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<ActivityRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Updated {} with ID: {}",
            self.resource.kind().as_str(),
            self.resource.id()
        )?;
        self.fmt_conflicts(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for the result of delete operations.
pub struct DeleteResult {
    pub resource_id: u64,
    pub resource_type: &'static str,
    pub resource_title: Option<String>,
}

impl DeleteResult {
    pub fn new(resource_id: u64, resource_type: &'static str) -> Self {
        Self {
            resource_id,
            resource_type,
            resource_title: None,
        }
    }

    pub fn with_title(resource_id: u64, resource_type: &'static str, title: String) -> Self {
        Self {
            resource_id,
            resource_type,
            resource_title: Some(title),
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource_title {
            Some(title) => writeln!(
                f,
                "Deleted {} '{}' (ID: {})",
                self.resource_type, title, self.resource_id
            ),
            None => writeln!(
                f,
                "Deleted {} with ID: {}",
                self.resource_type, self.resource_id
            ),
        }
    }
}
