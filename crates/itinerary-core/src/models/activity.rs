//! The three activity variants and the contract they share.
//!
//! Transportation, lodging and activity records are near-identical but stay
//! distinct types: each has one or two fields of its own and its own display
//! semantics. [`TripActivity`] lets detail and edit code treat them uniformly,
//! and [`ActivityRecord`] is the owned sum type used wherever a record of any
//! kind has to be stored or passed around.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    ActivityKind, Address, EditSnapshot, FileAttachment, PaymentStatus, TransportationType,
};

/// Capability set shared by every activity variant.
///
/// Optional capabilities (custom location, transportation type) have default
/// implementations that report "unsupported" and ignore writes, so callers can
/// set them on any variant without checking first.
pub trait TripActivity {
    fn kind(&self) -> ActivityKind;
    fn id(&self) -> u64;
    fn trip_id(&self) -> u64;
    fn name(&self) -> &str;
    fn start(&self) -> Timestamp;
    fn end(&self) -> Timestamp;
    fn start_tz_id(&self) -> Option<&str>;
    fn end_tz_id(&self) -> Option<&str>;
    fn cost(&self) -> Decimal;
    fn payment_status(&self) -> PaymentStatus;
    fn notes(&self) -> &str;
    /// Confirmation number or reservation text, depending on the variant.
    fn confirmation(&self) -> &str;
    fn organization_id(&self) -> Option<u64>;
    fn attachments(&self) -> &[FileAttachment];

    /// Copy every editable field into a flat snapshot.
    fn copy_for_editing(&self) -> EditSnapshot;

    /// Write a snapshot's fields back onto this record.
    fn apply_edits(&mut self, snapshot: &EditSnapshot);

    fn confirmation_label(&self) -> &'static str {
        self.kind().confirmation_label()
    }

    /// `end - start`. Negative when the record ends before it starts.
    fn duration(&self) -> SignedDuration {
        self.end().duration_since(self.start())
    }

    fn supports_custom_location(&self) -> bool {
        false
    }

    fn custom_location_name(&self) -> Option<&str> {
        None
    }

    fn set_custom_location_name(&mut self, _name: String) {}

    fn custom_address(&self) -> Option<&Address> {
        None
    }

    fn set_custom_address(&mut self, _address: Option<Address>) {}

    fn hide_location(&self) -> bool {
        false
    }

    fn set_hide_location(&mut self, _hide: bool) {}

    fn transportation_type(&self) -> Option<TransportationType> {
        None
    }

    fn set_transportation_type(&mut self, _transportation_type: TransportationType) {}

    /// Reference that identifies this record within its trip.
    fn reference(&self) -> ActivityRef {
        ActivityRef::new(self.kind(), self.id())
    }
}

/// A flight, train, drive or any other leg of travel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transportation {
    pub id: u64,
    pub trip_id: u64,
    pub name: String,
    pub transportation_type: TransportationType,
    pub start: Timestamp,
    pub start_tz_id: Option<String>,
    pub end: Timestamp,
    pub end_tz_id: Option<String>,
    pub cost: Decimal,
    pub payment_status: PaymentStatus,
    pub confirmation: String,
    pub notes: String,
    pub organization_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<FileAttachment>,
}

impl Transportation {
    pub fn new(trip_id: u64, name: impl Into<String>, start: Timestamp, end: Timestamp) -> Self {
        Self {
            trip_id,
            name: name.into(),
            start,
            end,
            ..Default::default()
        }
    }
}

impl TripActivity for Transportation {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Transportation
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn trip_id(&self) -> u64 {
        self.trip_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> Timestamp {
        self.start
    }

    fn end(&self) -> Timestamp {
        self.end
    }

    fn start_tz_id(&self) -> Option<&str> {
        self.start_tz_id.as_deref()
    }

    fn end_tz_id(&self) -> Option<&str> {
        self.end_tz_id.as_deref()
    }

    fn cost(&self) -> Decimal {
        self.cost
    }

    fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    fn notes(&self) -> &str {
        &self.notes
    }

    fn confirmation(&self) -> &str {
        &self.confirmation
    }

    fn organization_id(&self) -> Option<u64> {
        self.organization_id
    }

    fn attachments(&self) -> &[FileAttachment] {
        &self.attachments
    }

    fn copy_for_editing(&self) -> EditSnapshot {
        EditSnapshot {
            name: self.name.clone(),
            start: self.start,
            end: self.end,
            start_tz_id: self.start_tz_id.clone(),
            end_tz_id: self.end_tz_id.clone(),
            cost: self.cost,
            payment_status: self.payment_status,
            notes: self.notes.clone(),
            confirmation: self.confirmation.clone(),
            organization_id: self.organization_id,
            transportation_type: self.transportation_type,
            ..EditSnapshot::blank(ActivityKind::Transportation)
        }
    }

    fn apply_edits(&mut self, snapshot: &EditSnapshot) {
        self.name = snapshot.name.clone();
        self.start = snapshot.start;
        self.end = snapshot.end;
        self.start_tz_id = snapshot.start_tz_id.clone();
        self.end_tz_id = snapshot.end_tz_id.clone();
        self.cost = snapshot.cost;
        self.payment_status = snapshot.payment_status;
        self.notes = snapshot.notes.clone();
        self.confirmation = snapshot.confirmation.clone();
        self.organization_id = snapshot.organization_id;
        self.transportation_type = snapshot.transportation_type;
    }

    fn transportation_type(&self) -> Option<TransportationType> {
        Some(self.transportation_type)
    }

    fn set_transportation_type(&mut self, transportation_type: TransportationType) {
        self.transportation_type = transportation_type;
    }
}

/// A hotel, rental or any other place to stay.
///
/// `start`/`end` are check-in and check-out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lodging {
    pub id: u64,
    pub trip_id: u64,
    pub name: String,
    pub start: Timestamp,
    pub check_in_tz_id: Option<String>,
    pub end: Timestamp,
    pub check_out_tz_id: Option<String>,
    pub cost: Decimal,
    pub payment_status: PaymentStatus,
    pub reservation: String,
    pub notes: String,
    pub organization_id: Option<u64>,
    pub custom_location_name: String,
    pub custom_address: Option<Address>,
    pub hide_location: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<FileAttachment>,
}

impl Lodging {
    pub fn new(trip_id: u64, name: impl Into<String>, start: Timestamp, end: Timestamp) -> Self {
        Self {
            trip_id,
            name: name.into(),
            start,
            end,
            ..Default::default()
        }
    }
}

impl TripActivity for Lodging {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Lodging
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn trip_id(&self) -> u64 {
        self.trip_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> Timestamp {
        self.start
    }

    fn end(&self) -> Timestamp {
        self.end
    }

    fn start_tz_id(&self) -> Option<&str> {
        self.check_in_tz_id.as_deref()
    }

    fn end_tz_id(&self) -> Option<&str> {
        self.check_out_tz_id.as_deref()
    }

    fn cost(&self) -> Decimal {
        self.cost
    }

    fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    fn notes(&self) -> &str {
        &self.notes
    }

    fn confirmation(&self) -> &str {
        &self.reservation
    }

    fn organization_id(&self) -> Option<u64> {
        self.organization_id
    }

    fn attachments(&self) -> &[FileAttachment] {
        &self.attachments
    }

    fn copy_for_editing(&self) -> EditSnapshot {
        EditSnapshot {
            name: self.name.clone(),
            start: self.start,
            end: self.end,
            start_tz_id: self.check_in_tz_id.clone(),
            end_tz_id: self.check_out_tz_id.clone(),
            cost: self.cost,
            payment_status: self.payment_status,
            notes: self.notes.clone(),
            confirmation: self.reservation.clone(),
            organization_id: self.organization_id,
            custom_location_name: self.custom_location_name.clone(),
            custom_address: self.custom_address.clone(),
            hide_location: self.hide_location,
            ..EditSnapshot::blank(ActivityKind::Lodging)
        }
    }

    fn apply_edits(&mut self, snapshot: &EditSnapshot) {
        self.name = snapshot.name.clone();
        self.start = snapshot.start;
        self.end = snapshot.end;
        self.check_in_tz_id = snapshot.start_tz_id.clone();
        self.check_out_tz_id = snapshot.end_tz_id.clone();
        self.cost = snapshot.cost;
        self.payment_status = snapshot.payment_status;
        self.notes = snapshot.notes.clone();
        self.reservation = snapshot.confirmation.clone();
        self.organization_id = snapshot.organization_id;
        self.custom_location_name = snapshot.custom_location_name.clone();
        self.custom_address = snapshot.custom_address.clone();
        self.hide_location = snapshot.hide_location;
    }

    fn supports_custom_location(&self) -> bool {
        true
    }

    fn custom_location_name(&self) -> Option<&str> {
        Some(&self.custom_location_name)
    }

    fn set_custom_location_name(&mut self, name: String) {
        self.custom_location_name = name;
    }

    fn custom_address(&self) -> Option<&Address> {
        self.custom_address.as_ref()
    }

    fn set_custom_address(&mut self, address: Option<Address>) {
        self.custom_address = address;
    }

    fn hide_location(&self) -> bool {
        self.hide_location
    }

    fn set_hide_location(&mut self, hide: bool) {
        self.hide_location = hide;
    }
}

/// A tour, dinner, show or anything else done during the trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub trip_id: u64,
    pub name: String,
    pub start: Timestamp,
    pub start_tz_id: Option<String>,
    pub end: Timestamp,
    pub end_tz_id: Option<String>,
    pub cost: Decimal,
    pub payment_status: PaymentStatus,
    pub reservation: String,
    pub notes: String,
    pub organization_id: Option<u64>,
    pub custom_location_name: String,
    pub custom_address: Option<Address>,
    pub hide_location: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<FileAttachment>,
}

impl Activity {
    pub fn new(trip_id: u64, name: impl Into<String>, start: Timestamp, end: Timestamp) -> Self {
        Self {
            trip_id,
            name: name.into(),
            start,
            end,
            ..Default::default()
        }
    }
}

impl TripActivity for Activity {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Activity
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn trip_id(&self) -> u64 {
        self.trip_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> Timestamp {
        self.start
    }

    fn end(&self) -> Timestamp {
        self.end
    }

    fn start_tz_id(&self) -> Option<&str> {
        self.start_tz_id.as_deref()
    }

    fn end_tz_id(&self) -> Option<&str> {
        self.end_tz_id.as_deref()
    }

    fn cost(&self) -> Decimal {
        self.cost
    }

    fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    fn notes(&self) -> &str {
        &self.notes
    }

    fn confirmation(&self) -> &str {
        &self.reservation
    }

    fn organization_id(&self) -> Option<u64> {
        self.organization_id
    }

    fn attachments(&self) -> &[FileAttachment] {
        &self.attachments
    }

    fn copy_for_editing(&self) -> EditSnapshot {
        EditSnapshot {
            name: self.name.clone(),
            start: self.start,
            end: self.end,
            start_tz_id: self.start_tz_id.clone(),
            end_tz_id: self.end_tz_id.clone(),
            cost: self.cost,
            payment_status: self.payment_status,
            notes: self.notes.clone(),
            confirmation: self.reservation.clone(),
            organization_id: self.organization_id,
            custom_location_name: self.custom_location_name.clone(),
            custom_address: self.custom_address.clone(),
            hide_location: self.hide_location,
            ..EditSnapshot::blank(ActivityKind::Activity)
        }
    }

    fn apply_edits(&mut self, snapshot: &EditSnapshot) {
        self.name = snapshot.name.clone();
        self.start = snapshot.start;
        self.end = snapshot.end;
        self.start_tz_id = snapshot.start_tz_id.clone();
        self.end_tz_id = snapshot.end_tz_id.clone();
        self.cost = snapshot.cost;
        self.payment_status = snapshot.payment_status;
        self.notes = snapshot.notes.clone();
        self.reservation = snapshot.confirmation.clone();
        self.organization_id = snapshot.organization_id;
        self.custom_location_name = snapshot.custom_location_name.clone();
        self.custom_address = snapshot.custom_address.clone();
        self.hide_location = snapshot.hide_location;
    }

    fn supports_custom_location(&self) -> bool {
        true
    }

    fn custom_location_name(&self) -> Option<&str> {
        Some(&self.custom_location_name)
    }

    fn set_custom_location_name(&mut self, name: String) {
        self.custom_location_name = name;
    }

    fn custom_address(&self) -> Option<&Address> {
        self.custom_address.as_ref()
    }

    fn set_custom_address(&mut self, address: Option<Address>) {
        self.custom_address = address;
    }

    fn hide_location(&self) -> bool {
        self.hide_location
    }

    fn set_hide_location(&mut self, hide: bool) {
        self.hide_location = hide;
    }
}

/// Identifies one activity record: the kind selects the collection, the id
/// the row within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityRef {
    pub kind: ActivityKind,
    pub id: u64,
}

impl ActivityRef {
    pub fn new(kind: ActivityKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for ActivityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind.as_str(), self.id)
    }
}

/// Owned record of any activity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActivityRecord {
    Transportation(Transportation),
    Lodging(Lodging),
    Activity(Activity),
}

impl ActivityRecord {
    /// Build a new, unsaved record of the snapshot's kind.
    pub fn from_snapshot(trip_id: u64, snapshot: &EditSnapshot) -> Self {
        let mut record = match snapshot.kind {
            ActivityKind::Transportation => ActivityRecord::Transportation(Transportation {
                trip_id,
                ..Default::default()
            }),
            ActivityKind::Lodging => ActivityRecord::Lodging(Lodging {
                trip_id,
                ..Default::default()
            }),
            ActivityKind::Activity => ActivityRecord::Activity(Activity {
                trip_id,
                ..Default::default()
            }),
        };
        record.as_activity_mut().apply_edits(snapshot);
        record
    }

    pub fn as_activity(&self) -> &dyn TripActivity {
        match self {
            ActivityRecord::Transportation(t) => t,
            ActivityRecord::Lodging(l) => l,
            ActivityRecord::Activity(a) => a,
        }
    }

    pub fn as_activity_mut(&mut self) -> &mut dyn TripActivity {
        match self {
            ActivityRecord::Transportation(t) => t,
            ActivityRecord::Lodging(l) => l,
            ActivityRecord::Activity(a) => a,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.as_activity().kind()
    }

    pub fn id(&self) -> u64 {
        self.as_activity().id()
    }

    pub fn reference(&self) -> ActivityRef {
        self.as_activity().reference()
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        match self {
            ActivityRecord::Transportation(t) => t.id = id,
            ActivityRecord::Lodging(l) => l.id = id,
            ActivityRecord::Activity(a) => a.id = id,
        }
    }

    pub(crate) fn attachments_mut(&mut self) -> &mut Vec<FileAttachment> {
        match self {
            ActivityRecord::Transportation(t) => &mut t.attachments,
            ActivityRecord::Lodging(l) => &mut l.attachments,
            ActivityRecord::Activity(a) => &mut a.attachments,
        }
    }
}

impl From<Transportation> for ActivityRecord {
    fn from(value: Transportation) -> Self {
        ActivityRecord::Transportation(value)
    }
}

impl From<Lodging> for ActivityRecord {
    fn from(value: Lodging) -> Self {
        ActivityRecord::Lodging(value)
    }
}

impl From<Activity> for ActivityRecord {
    fn from(value: Activity) -> Self {
        ActivityRecord::Activity(value)
    }
}
