//! Variant-agnostic edit snapshot.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ActivityKind, Address, PaymentStatus, TransportationType};

/// Flat copy of an activity's editable fields.
///
/// An edit session copies a record out with
/// [`TripActivity::copy_for_editing`](super::TripActivity::copy_for_editing),
/// mutates the snapshot, and either drops it (cancel) or writes it back with
/// [`TripActivity::apply_edits`](super::TripActivity::apply_edits) (save).
/// Time zone and confirmation fields use generic names here; each variant maps
/// them onto its own fields.
///
/// Fields a variant does not support keep their defaults and are ignored on
/// apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSnapshot {
    /// Variant the snapshot was taken from
    pub kind: ActivityKind,
    pub name: String,
    pub start: Timestamp,
    pub end: Timestamp,
    pub start_tz_id: Option<String>,
    pub end_tz_id: Option<String>,
    pub cost: Decimal,
    pub payment_status: PaymentStatus,
    pub notes: String,
    /// Confirmation number (transportation) or reservation (lodging, activity)
    pub confirmation: String,
    pub organization_id: Option<u64>,
    pub custom_location_name: String,
    pub custom_address: Option<Address>,
    pub hide_location: bool,
    pub transportation_type: TransportationType,
}

impl EditSnapshot {
    /// Blank snapshot for a new record of the given kind.
    pub fn blank(kind: ActivityKind) -> Self {
        Self {
            kind,
            name: String::new(),
            start: Timestamp::default(),
            end: Timestamp::default(),
            start_tz_id: None,
            end_tz_id: None,
            cost: Decimal::ZERO,
            payment_status: PaymentStatus::default(),
            notes: String::new(),
            confirmation: String::new(),
            organization_id: None,
            custom_location_name: String::new(),
            custom_address: None,
            hide_location: false,
            transportation_type: TransportationType::default(),
        }
    }
}
