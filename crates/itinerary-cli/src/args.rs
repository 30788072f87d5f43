//! Command-line argument definitions using clap's derive API.
//!
//! Argument structs here carry the clap attributes; they convert into the
//! framework-free parameter types of `itinerary_core::params` with `From`, or
//! with `into_params` where the conversion can fail (date parsing).
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Itinerary
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use itinerary_core::{
    models::{ActivityKind, ActivityRef, Address, PaymentStatus, TransportationType},
    params::*,
};
use rust_decimal::Decimal;

use crate::time::resolve_instant;

/// Plan trips: transportation, lodging and activities, with date-conflict
/// checks against each trip's own dates.
#[derive(Parser)]
#[command(version, about, name = "itin")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/itinerary/itinerary.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. With no command, trips are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage transportation, lodging and activity records
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Manage organizations
    #[command(alias = "o")]
    Org {
        #[command(subcommand)]
        command: OrgCommands,
    },
    /// Manage files attached to records
    #[command(alias = "f")]
    Attachment {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
}

// ── Trips ────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    #[command(alias = "c")]
    Create(CreateTripArgs),
    /// List all trips
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a trip with its full itinerary
    #[command(alias = "s")]
    Show(TripIdArgs),
    /// Rename a trip, change its notes or protection
    #[command(alias = "u")]
    Update(UpdateTripArgs),
    /// Set a trip's dates; an omitted date is cleared
    #[command(alias = "d")]
    Dates(TripDatesArgs),
    /// Check a trip's dates against its records without saving anything
    Conflicts(TripDatesArgs),
    /// Delete a trip with all its records and attachments
    Delete(DeleteTripArgs),
}

/// Create a new trip
#[derive(ClapArgs)]
pub struct CreateTripArgs {
    /// Name of the trip
    pub name: String,
    /// Free-form notes
    #[arg(short, long)]
    pub notes: Option<String>,
    /// First day of the trip (date, local date-time or RFC 3339 instant)
    #[arg(long)]
    pub start: Option<String>,
    /// Last day of the trip
    #[arg(long)]
    pub end: Option<String>,
}

impl CreateTripArgs {
    pub fn into_params(self) -> Result<CreateTrip> {
        Ok(CreateTrip {
            name: self.name,
            notes: self.notes,
            start_date: resolve_optional(self.start.as_deref())?,
            end_date: resolve_optional(self.end.as_deref())?,
        })
    }
}

#[derive(ClapArgs)]
pub struct TripIdArgs {
    /// ID of the trip
    pub id: u64,
}

impl From<TripIdArgs> for Id {
    fn from(val: TripIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct UpdateTripArgs {
    /// ID of the trip
    pub id: u64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New notes
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Mark the trip as protected
    #[arg(long, conflicts_with = "unprotect")]
    pub protect: bool,
    /// Remove protection from the trip
    #[arg(long)]
    pub unprotect: bool,
}

impl From<UpdateTripArgs> for UpdateTrip {
    fn from(val: UpdateTripArgs) -> Self {
        let is_protected = match (val.protect, val.unprotect) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        UpdateTrip {
            id: val.id,
            name: val.name,
            notes: val.notes,
            is_protected,
        }
    }
}

#[derive(ClapArgs)]
pub struct TripDatesArgs {
    /// ID of the trip
    pub id: u64,
    /// Start date
    #[arg(long)]
    pub start: Option<String>,
    /// End date
    #[arg(long)]
    pub end: Option<String>,
}

impl TripDatesArgs {
    pub fn into_params(self) -> Result<SetTripDates> {
        Ok(SetTripDates {
            id: self.id,
            start_date: resolve_optional(self.start.as_deref())?,
            end_date: resolve_optional(self.end.as_deref())?,
        })
    }

    pub fn into_check(self) -> Result<CheckTripDates> {
        let SetTripDates {
            id,
            start_date,
            end_date,
        } = self.into_params()?;
        Ok(CheckTripDates {
            id,
            start_date,
            end_date,
        })
    }
}

#[derive(ClapArgs)]
pub struct DeleteTripArgs {
    /// ID of the trip
    pub id: u64,
    /// Delete even if the trip is protected
    #[arg(long)]
    pub force: bool,
}

impl From<DeleteTripArgs> for DeleteTrip {
    fn from(val: DeleteTripArgs) -> Self {
        DeleteTrip {
            id: val.id,
            force: val.force,
        }
    }
}

// ── Activity records ─────────────────────────────────────────────────────

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Add a record to a trip
    #[command(alias = "a")]
    Add(AddActivityArgs),
    /// Edit fields of a record
    #[command(alias = "e")]
    Edit(EditActivityArgs),
    /// Show a record
    #[command(alias = "s")]
    Show(ActivityTargetArgs),
    /// Delete a record and its attachments
    Delete(ActivityTargetArgs),
}

/// Identifies one record by kind and ID
#[derive(ClapArgs)]
pub struct ActivityTargetArgs {
    /// Kind of record
    #[arg(value_enum)]
    pub kind: KindArg,
    /// ID of the record
    pub id: u64,
}

impl From<ActivityTargetArgs> for ActivityRef {
    fn from(val: ActivityTargetArgs) -> Self {
        ActivityRef::new(val.kind.into(), val.id)
    }
}

/// Postal address parts shared by organizations and custom locations
#[derive(ClapArgs, Default)]
pub struct AddressArgs {
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
}

impl AddressArgs {
    /// `None` when no part was given.
    pub fn into_address(self) -> Option<Address> {
        let address = Address {
            street: self.street,
            city: self.city,
            state: self.state,
            country: self.country,
            postal_code: self.postal_code,
        };
        if address.is_empty() {
            None
        } else {
            Some(address)
        }
    }
}

#[derive(ClapArgs)]
pub struct AddActivityArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Kind of record
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Name of the record
    pub name: String,
    /// When it starts (date, local date-time or RFC 3339 instant)
    #[arg(long)]
    pub start: String,
    /// When it ends
    #[arg(long)]
    pub end: String,
    /// IANA time zone of the start, e.g. Europe/Lisbon
    #[arg(long)]
    pub start_tz: Option<String>,
    /// IANA time zone of the end; defaults to the start time zone
    #[arg(long)]
    pub end_tz: Option<String>,
    /// Cost
    #[arg(long)]
    pub cost: Option<Decimal>,
    /// Payment status
    #[arg(long, value_enum)]
    pub payment: Option<PaymentArg>,
    /// Confirmation number or reservation
    #[arg(long)]
    pub confirmation: Option<String>,
    /// Free-form notes
    #[arg(short, long)]
    pub notes: Option<String>,
    /// ID of the organization providing it
    #[arg(long)]
    pub org: Option<u64>,
    /// Custom location name (lodging and activities)
    #[arg(long)]
    pub location: Option<String>,
    #[command(flatten)]
    pub address: AddressArgs,
    /// Hide the location in detail views
    #[arg(long)]
    pub hide_location: bool,
    /// Mode of travel (transportation)
    #[arg(long = "type", value_enum)]
    pub transportation_type: Option<TransportArg>,
}

impl AddActivityArgs {
    pub fn into_params(self) -> Result<AddActivity> {
        let end_tz = self.end_tz.or_else(|| self.start_tz.clone());
        let start = resolve_instant(&self.start, self.start_tz.as_deref())?;
        let end = resolve_instant(&self.end, end_tz.as_deref())?;

        let mut params = AddActivity::new(self.trip_id, self.kind.into(), self.name, start, end);
        params.start_tz_id = self.start_tz;
        params.end_tz_id = end_tz;
        params.cost = self.cost.unwrap_or_default();
        params.payment_status = self.payment.map(Into::into).unwrap_or_default();
        params.confirmation = self.confirmation;
        params.notes = self.notes;
        params.organization_id = self.org;
        params.custom_location_name = self.location;
        params.custom_address = self.address.into_address();
        params.hide_location = self.hide_location;
        params.transportation_type = self.transportation_type.map(Into::into);
        Ok(params)
    }
}

#[derive(ClapArgs)]
pub struct EditActivityArgs {
    #[command(flatten)]
    pub target: ActivityTargetArgs,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New start
    #[arg(long)]
    pub start: Option<String>,
    /// New end
    #[arg(long)]
    pub end: Option<String>,
    /// New start time zone
    #[arg(long, conflicts_with = "clear_start_tz")]
    pub start_tz: Option<String>,
    /// Remove the start time zone
    #[arg(long)]
    pub clear_start_tz: bool,
    /// New end time zone
    #[arg(long, conflicts_with = "clear_end_tz")]
    pub end_tz: Option<String>,
    /// Remove the end time zone
    #[arg(long)]
    pub clear_end_tz: bool,
    /// New cost
    #[arg(long)]
    pub cost: Option<Decimal>,
    /// New payment status
    #[arg(long, value_enum)]
    pub payment: Option<PaymentArg>,
    /// New confirmation number or reservation
    #[arg(long)]
    pub confirmation: Option<String>,
    /// New notes
    #[arg(short, long)]
    pub notes: Option<String>,
    /// New organization ID
    #[arg(long, conflicts_with = "clear_org")]
    pub org: Option<u64>,
    /// Remove the organization
    #[arg(long)]
    pub clear_org: bool,
    /// New custom location name
    #[arg(long)]
    pub location: Option<String>,
    #[command(flatten)]
    pub address: AddressArgs,
    /// Remove the custom address
    #[arg(long)]
    pub clear_address: bool,
    /// Hide the location
    #[arg(long, conflicts_with = "show_location")]
    pub hide_location: bool,
    /// Show the location again
    #[arg(long)]
    pub show_location: bool,
    /// New mode of travel
    #[arg(long = "type", value_enum)]
    pub transportation_type: Option<TransportArg>,
}

impl EditActivityArgs {
    pub fn into_params(self) -> Result<EditActivity> {
        let mut params = EditActivity::new(self.target.into());
        params.start = self
            .start
            .as_deref()
            .map(|s| resolve_instant(s, self.start_tz.as_deref()))
            .transpose()?;
        params.end = self
            .end
            .as_deref()
            .map(|s| resolve_instant(s, self.end_tz.as_deref().or(self.start_tz.as_deref())))
            .transpose()?;
        params.name = self.name;
        params.start_tz_id = self.start_tz;
        params.clear_start_tz = self.clear_start_tz;
        params.end_tz_id = self.end_tz;
        params.clear_end_tz = self.clear_end_tz;
        params.cost = self.cost;
        params.payment_status = self.payment.map(Into::into);
        params.confirmation = self.confirmation;
        params.notes = self.notes;
        params.organization_id = self.org;
        params.clear_organization = self.clear_org;
        params.custom_location_name = self.location;
        params.custom_address = self.address.into_address();
        params.clear_address = self.clear_address;
        params.hide_location = match (self.hide_location, self.show_location) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        params.transportation_type = self.transportation_type.map(Into::into);
        Ok(params)
    }
}

// ── Organizations ────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub enum OrgCommands {
    /// Create an organization
    #[command(alias = "c")]
    Create(CreateOrgArgs),
    /// List organizations
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show an organization
    #[command(alias = "s")]
    Show(OrgIdArgs),
    /// Delete an organization; records referencing it are kept
    Delete(OrgIdArgs),
}

#[derive(ClapArgs)]
pub struct CreateOrgArgs {
    /// Name of the organization
    pub name: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[command(flatten)]
    pub address: AddressArgs,
}

impl From<CreateOrgArgs> for CreateOrganization {
    fn from(val: CreateOrgArgs) -> Self {
        CreateOrganization {
            name: val.name,
            phone: val.phone,
            email: val.email,
            website: val.website,
            address: val.address.into_address(),
        }
    }
}

#[derive(ClapArgs)]
pub struct OrgIdArgs {
    /// ID of the organization
    pub id: u64,
}

impl From<OrgIdArgs> for Id {
    fn from(val: OrgIdArgs) -> Self {
        Id { id: val.id }
    }
}

// ── Attachments ──────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub enum AttachmentCommands {
    /// Attach a file to a record
    #[command(alias = "a")]
    Add(AttachArgs),
    /// Write an attachment to a file
    #[command(alias = "x")]
    Export(ExportArgs),
    /// Delete an attachment
    Delete(AttachmentIdArgs),
}

#[derive(ClapArgs)]
pub struct AttachArgs {
    #[command(flatten)]
    pub target: ActivityTargetArgs,
    /// File to attach
    pub path: PathBuf,
    /// Name to store the file under; defaults to the file's own name
    #[arg(long)]
    pub name: Option<String>,
}

impl From<AttachArgs> for AttachFile {
    fn from(val: AttachArgs) -> Self {
        AttachFile {
            target: val.target.into(),
            path: val.path,
            file_name: val.name,
        }
    }
}

#[derive(ClapArgs)]
pub struct ExportArgs {
    /// ID of the attachment
    pub id: u64,
    /// Where to write the file
    pub output: PathBuf,
}

impl From<ExportArgs> for ExportAttachment {
    fn from(val: ExportArgs) -> Self {
        ExportAttachment {
            id: val.id,
            output: val.output,
        }
    }
}

#[derive(ClapArgs)]
pub struct AttachmentIdArgs {
    /// ID of the attachment
    pub id: u64,
}

impl From<AttachmentIdArgs> for Id {
    fn from(val: AttachmentIdArgs) -> Self {
        Id { id: val.id }
    }
}

// ── Value enums ──────────────────────────────────────────────────────────

/// Command-line representation of record kinds
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum KindArg {
    #[value(alias = "transport")]
    Transportation,
    Lodging,
    Activity,
}

impl From<KindArg> for ActivityKind {
    fn from(val: KindArg) -> Self {
        match val {
            KindArg::Transportation => ActivityKind::Transportation,
            KindArg::Lodging => ActivityKind::Lodging,
            KindArg::Activity => ActivityKind::Activity,
        }
    }
}

/// Command-line representation of payment status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PaymentArg {
    Unpaid,
    Deposit,
    #[value(alias = "paid-in-full")]
    Paid,
}

impl From<PaymentArg> for PaymentStatus {
    fn from(val: PaymentArg) -> Self {
        match val {
            PaymentArg::Unpaid => PaymentStatus::Unpaid,
            PaymentArg::Deposit => PaymentStatus::Deposit,
            PaymentArg::Paid => PaymentStatus::PaidInFull,
        }
    }
}

/// Command-line representation of transportation types
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TransportArg {
    #[value(alias = "flight")]
    Plane,
    Train,
    Bus,
    Car,
    Ferry,
    Bicycle,
    Walking,
    Other,
}

impl From<TransportArg> for TransportationType {
    fn from(val: TransportArg) -> Self {
        match val {
            TransportArg::Plane => TransportationType::Plane,
            TransportArg::Train => TransportationType::Train,
            TransportArg::Bus => TransportationType::Bus,
            TransportArg::Car => TransportationType::Car,
            TransportArg::Ferry => TransportationType::Ferry,
            TransportArg::Bicycle => TransportationType::Bicycle,
            TransportArg::Walking => TransportationType::Walking,
            TransportArg::Other => TransportationType::Other,
        }
    }
}

fn resolve_optional(text: Option<&str>) -> Result<Option<jiff::Timestamp>> {
    text.map(|s| resolve_instant(s, None)).transpose()
}
