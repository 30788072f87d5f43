//! One-line status messages for operations with no resource to show.

use std::fmt;

use crate::models::ConflictReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Warning,
}

/// A `Success:` or `Warning:` line, optionally followed by bullet details.
pub struct OperationStatus {
    pub message: String,
    pub details: Vec<String>,
    level: Level,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            details: Vec::new(),
            level: Level::Success,
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            message,
            details: Vec::new(),
            level: Level::Warning,
        }
    }

    /// Attach one bullet per item.
    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.details = details.into_iter().map(|d| d.to_string()).collect();
        self
    }

    /// Warning with one bullet per date conflict.
    pub fn date_conflicts(report: &ConflictReport) -> Self {
        Self::warning("date conflicts".to_string()).with_details(report.conflicts())
    }

    pub fn is_warning(&self) -> bool {
        self.level == Level::Warning
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            Level::Success => "Success:",
            Level::Warning => "Warning:",
        };
        writeln!(f, "{prefix} {}", self.message)?;
        for detail in &self.details {
            writeln!(f, "- {detail}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_lists_details() {
        let status = OperationStatus::warning("date conflicts".to_string())
            .with_details(["starts late", "ends early"]);
        assert!(status.is_warning());
        assert_eq!(
            status.to_string(),
            "Warning: date conflicts\n- starts late\n- ends early\n"
        );
    }

    #[test]
    fn test_success_has_no_bullets() {
        let status = OperationStatus::success("Trip dates cover all records.".to_string());
        assert!(!status.is_warning());
        assert_eq!(
            status.to_string(),
            "Success: Trip dates cover all records.\n"
        );
    }
}
