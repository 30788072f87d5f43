//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it richly or print it plain.

use std::fmt;

use super::datetime::{HumanDuration, LocalDate, LocalDateTime, ZonedDateTime};
use crate::models::{
    Activity, ActivityKind, ActivityRecord, Lodging, Organization, PaymentStatus, Transportation,
    TransportationType, Trip, TripActivity, TripSummary,
};

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for TransportationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detail view shared by every activity variant.
pub struct ActivityDetail<'a>(pub &'a dyn TripActivity);

impl<'a> fmt::Display for ActivityDetail<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let activity = self.0;
        writeln!(
            f,
            "### {} {}. {}",
            activity.kind().with_icon(),
            activity.id(),
            activity.name()
        )?;
        writeln!(f)?;

        if let Some(transportation_type) = activity.transportation_type() {
            writeln!(f, "- Type: {transportation_type}")?;
        }
        writeln!(
            f,
            "- Start: {}",
            ZonedDateTime::new(&activity.start(), activity.start_tz_id())
        )?;
        writeln!(
            f,
            "- End: {}",
            ZonedDateTime::new(&activity.end(), activity.end_tz_id())
        )?;
        writeln!(f, "- Duration: {}", HumanDuration(activity.duration()))?;
        writeln!(
            f,
            "- Cost: {} ({})",
            activity.cost(),
            activity.payment_status()
        )?;
        if !activity.confirmation().is_empty() {
            writeln!(
                f,
                "- {}: {}",
                activity.confirmation_label(),
                activity.confirmation()
            )?;
        }
        if let Some(org_id) = activity.organization_id() {
            writeln!(f, "- Organization ID: {org_id}")?;
        }
        if activity.supports_custom_location() && !activity.hide_location() {
            let name = activity.custom_location_name().unwrap_or_default();
            let address = activity
                .custom_address()
                .map(|a| a.formatted())
                .unwrap_or_default();
            match (name.is_empty(), address.is_empty()) {
                (false, false) => writeln!(f, "- Location: {name}, {address}")?,
                (false, true) => writeln!(f, "- Location: {name}")?,
                (true, false) => writeln!(f, "- Location: {address}")?,
                (true, true) => {}
            }
        }
        writeln!(f)?;

        if !activity.notes().is_empty() {
            writeln!(f, "{}", activity.notes())?;
            writeln!(f)?;
        }

        if !activity.attachments().is_empty() {
            writeln!(f, "#### Attachments")?;
            writeln!(f)?;
            for attachment in activity.attachments() {
                writeln!(
                    f,
                    "- {} ({}, {} bytes, ID: {})",
                    attachment.file_name, attachment.mime_type, attachment.file_size, attachment.id
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Transportation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ActivityDetail(self))
    }
}

impl fmt::Display for Lodging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ActivityDetail(self))
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ActivityDetail(self))
    }
}

impl fmt::Display for ActivityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ActivityDetail(self.as_activity()))
    }
}

impl Trip {
    fn fmt_dates(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => {
                writeln!(f, "- Dates: {} to {}", LocalDate(start), LocalDate(end))
            }
            (Some(start), None) => writeln!(f, "- Dates: from {}", LocalDate(start)),
            (None, Some(end)) => writeln!(f, "- Dates: until {}", LocalDate(end)),
            (None, None) => writeln!(f, "- Dates: not set"),
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        self.fmt_dates(f)?;
        if let Some(span) = self.cached_date_span() {
            writeln!(f, "- Activity days: {} to {}", span.start, span.end)?;
        }
        writeln!(f, "- Records: {}", self.total_activity_count())?;
        writeln!(f, "- Total cost: {}", self.total_cost())?;
        if self.is_protected {
            writeln!(f, "- Protected: yes")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        if let Some(report) = self.current_date_conflicts() {
            writeln!(f, "\n## Date Conflicts")?;
            writeln!(f)?;
            for conflict in report.conflicts() {
                writeln!(f, "- {conflict}")?;
            }
        }

        let records = self.sorted_activities();
        if records.is_empty() {
            writeln!(f, "\nNo activities in this trip.")?;
        } else {
            writeln!(f, "\n## Itinerary")?;
            writeln!(f)?;
            for record in records {
                write!(f, "{}", ActivityDetail(record))?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lock = if self.is_protected { " [protected]" } else { "" };
        writeln!(f, "## {} (ID: {}){lock}", self.name, self.id)?;
        writeln!(f)?;

        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => {
                writeln!(f, "- **Dates**: {} to {}", LocalDate(start), LocalDate(end))?
            }
            _ => writeln!(f, "- **Dates**: not set")?,
        }
        writeln!(
            f,
            "- **Records**: {} (total cost {})",
            self.activity_count, self.total_cost
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        if let Some(phone) = &self.phone {
            writeln!(f, "- **Phone**: {phone}")?;
        }
        if let Some(email) = &self.email {
            writeln!(f, "- **Email**: {email}")?;
        }
        if let Some(website) = &self.website {
            writeln!(f, "- **Website**: {website}")?;
        }
        if let Some(address) = self.address.as_ref().filter(|a| !a.is_empty()) {
            writeln!(f, "- **Address**: {}", address.formatted())?;
        }
        writeln!(f)?;
        Ok(())
    }
}
