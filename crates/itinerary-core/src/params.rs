//! Parameter structures for itinerary operations.
//!
//! These structs carry no interface-specific derives. The CLI defines its own
//! `clap` argument structs and converts them into these with `From`, so the
//! core stays independent of any one front end.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│   Itinerary     │
//! │  (clap derives) │    │ (this module)   │    │   (service)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::path::PathBuf;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    ActivityKind, ActivityRef, Address, EditSnapshot, PaymentStatus, TransportationType,
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTrip {
    pub name: String,
    pub notes: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Parameters for updating a trip's descriptive fields. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTrip {
    pub id: u64,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub is_protected: Option<bool>,
}

/// Parameters for replacing a trip's declared dates. `None` clears a side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetTripDates {
    pub id: u64,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Parameters for a dry-run conflict check. When both dates are `None` the
/// trip's own dates are checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckTripDates {
    pub id: u64,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Parameters for deleting a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTrip {
    pub id: u64,
    /// Required to delete a protected trip
    pub force: bool,
}

/// Parameters for adding an activity record to a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddActivity {
    pub trip_id: u64,
    pub kind: ActivityKind,
    pub name: String,
    pub start: Timestamp,
    pub end: Timestamp,
    pub start_tz_id: Option<String>,
    pub end_tz_id: Option<String>,
    pub cost: Decimal,
    pub payment_status: PaymentStatus,
    /// Confirmation number or reservation text
    pub confirmation: Option<String>,
    pub notes: Option<String>,
    pub organization_id: Option<u64>,
    pub custom_location_name: Option<String>,
    pub custom_address: Option<Address>,
    pub hide_location: bool,
    pub transportation_type: Option<TransportationType>,
}

impl AddActivity {
    /// Minimal parameters: everything optional left at its default.
    pub fn new(
        trip_id: u64,
        kind: ActivityKind,
        name: impl Into<String>,
        start: Timestamp,
        end: Timestamp,
    ) -> Self {
        Self {
            trip_id,
            kind,
            name: name.into(),
            start,
            end,
            start_tz_id: None,
            end_tz_id: None,
            cost: Decimal::ZERO,
            payment_status: PaymentStatus::default(),
            confirmation: None,
            notes: None,
            organization_id: None,
            custom_location_name: None,
            custom_address: None,
            hide_location: false,
            transportation_type: None,
        }
    }

    /// The edit snapshot a new record is built from.
    pub fn to_snapshot(&self) -> EditSnapshot {
        EditSnapshot {
            name: self.name.clone(),
            start: self.start,
            end: self.end,
            start_tz_id: self.start_tz_id.clone(),
            end_tz_id: self.end_tz_id.clone(),
            cost: self.cost,
            payment_status: self.payment_status,
            notes: self.notes.clone().unwrap_or_default(),
            confirmation: self.confirmation.clone().unwrap_or_default(),
            organization_id: self.organization_id,
            custom_location_name: self.custom_location_name.clone().unwrap_or_default(),
            custom_address: self.custom_address.clone(),
            hide_location: self.hide_location,
            transportation_type: self.transportation_type.unwrap_or_default(),
            ..EditSnapshot::blank(self.kind)
        }
    }
}

/// Parameters for editing an activity record. `None` keeps the current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditActivity {
    pub target: ActivityRef,
    pub name: Option<String>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub start_tz_id: Option<String>,
    /// Fall back to the system zone for the start
    pub clear_start_tz: bool,
    pub end_tz_id: Option<String>,
    pub clear_end_tz: bool,
    pub cost: Option<Decimal>,
    pub payment_status: Option<PaymentStatus>,
    pub confirmation: Option<String>,
    pub notes: Option<String>,
    pub organization_id: Option<u64>,
    /// Drop the organization reference
    pub clear_organization: bool,
    pub custom_location_name: Option<String>,
    pub custom_address: Option<Address>,
    pub clear_address: bool,
    pub hide_location: Option<bool>,
    pub transportation_type: Option<TransportationType>,
}

impl EditActivity {
    /// An edit that changes nothing.
    pub fn new(target: ActivityRef) -> Self {
        Self {
            target,
            name: None,
            start: None,
            end: None,
            start_tz_id: None,
            clear_start_tz: false,
            end_tz_id: None,
            clear_end_tz: false,
            cost: None,
            payment_status: None,
            confirmation: None,
            notes: None,
            organization_id: None,
            clear_organization: false,
            custom_location_name: None,
            custom_address: None,
            clear_address: false,
            hide_location: None,
            transportation_type: None,
        }
    }

    /// Overlay the requested changes onto an edit session. A `clear_*` flag
    /// wins over a new value for the same field.
    pub fn apply_to(&self, snapshot: &mut EditSnapshot) {
        if let Some(name) = &self.name {
            snapshot.name = name.clone();
        }
        if let Some(start) = self.start {
            snapshot.start = start;
        }
        if let Some(end) = self.end {
            snapshot.end = end;
        }
        if self.clear_start_tz {
            snapshot.start_tz_id = None;
        } else if let Some(tz) = &self.start_tz_id {
            snapshot.start_tz_id = Some(tz.clone());
        }
        if self.clear_end_tz {
            snapshot.end_tz_id = None;
        } else if let Some(tz) = &self.end_tz_id {
            snapshot.end_tz_id = Some(tz.clone());
        }
        if let Some(cost) = self.cost {
            snapshot.cost = cost;
        }
        if let Some(status) = self.payment_status {
            snapshot.payment_status = status;
        }
        if let Some(confirmation) = &self.confirmation {
            snapshot.confirmation = confirmation.clone();
        }
        if let Some(notes) = &self.notes {
            snapshot.notes = notes.clone();
        }
        if self.clear_organization {
            snapshot.organization_id = None;
        } else if let Some(org_id) = self.organization_id {
            snapshot.organization_id = Some(org_id);
        }
        if let Some(location) = &self.custom_location_name {
            snapshot.custom_location_name = location.clone();
        }
        if self.clear_address {
            snapshot.custom_address = None;
        } else if let Some(address) = &self.custom_address {
            snapshot.custom_address = Some(address.clone());
        }
        if let Some(hide) = self.hide_location {
            snapshot.hide_location = hide;
        }
        if let Some(transportation_type) = self.transportation_type {
            snapshot.transportation_type = transportation_type;
        }
    }
}

/// Parameters for creating an organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrganization {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
}

/// Parameters for attaching a file to an activity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachFile {
    pub target: ActivityRef,
    pub path: PathBuf,
    /// Stored name; defaults to the file name of `path`
    pub file_name: Option<String>,
}

/// Parameters for writing an attachment's bytes to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportAttachment {
    pub id: u64,
    pub output: PathBuf,
}
