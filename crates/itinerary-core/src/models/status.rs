//! Enumerations shared by the activity variants.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How much of an activity's cost has been paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing paid yet
    #[default]
    Unpaid,

    /// A deposit has been paid
    Deposit,

    /// The full cost has been paid
    PaidInFull,
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unpaid" => Ok(PaymentStatus::Unpaid),
            "deposit" => Ok(PaymentStatus::Deposit),
            "paid_in_full" | "paidinfull" | "paid" => Ok(PaymentStatus::PaidInFull),
            _ => Err(format!("Invalid payment status: {s}")),
        }
    }
}

impl PaymentStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Deposit => "deposit",
            PaymentStatus::PaidInFull => "paid_in_full",
        }
    }

    /// Human-readable label used in detail views.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Deposit => "Deposit Paid",
            PaymentStatus::PaidInFull => "Paid in Full",
        }
    }
}

/// Mode of travel for a transportation record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportationType {
    #[default]
    Plane,
    Train,
    Bus,
    Car,
    Ferry,
    Bicycle,
    Walking,
    Other,
}

impl FromStr for TransportationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plane" | "flight" | "airplane" => Ok(TransportationType::Plane),
            "train" => Ok(TransportationType::Train),
            "bus" => Ok(TransportationType::Bus),
            "car" => Ok(TransportationType::Car),
            "ferry" | "boat" => Ok(TransportationType::Ferry),
            "bicycle" | "bike" => Ok(TransportationType::Bicycle),
            "walking" | "walk" => Ok(TransportationType::Walking),
            "other" => Ok(TransportationType::Other),
            _ => Err(format!("Invalid transportation type: {s}")),
        }
    }
}

impl TransportationType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportationType::Plane => "plane",
            TransportationType::Train => "train",
            TransportationType::Bus => "bus",
            TransportationType::Car => "car",
            TransportationType::Ferry => "ferry",
            TransportationType::Bicycle => "bicycle",
            TransportationType::Walking => "walking",
            TransportationType::Other => "other",
        }
    }
}

/// Discriminant for the three activity variants.
///
/// Carries the display semantics that differ between variants: labels, icons
/// and which optional fields an editor should offer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Transportation,
    Lodging,
    Activity,
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transportation" | "transport" | "t" => Ok(ActivityKind::Transportation),
            "lodging" | "l" => Ok(ActivityKind::Lodging),
            "activity" | "a" => Ok(ActivityKind::Activity),
            _ => Err(format!("Invalid activity kind: {s}")),
        }
    }
}

impl ActivityKind {
    /// All kinds in display order.
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Transportation,
        ActivityKind::Lodging,
        ActivityKind::Activity,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Transportation => "transportation",
            ActivityKind::Lodging => "lodging",
            ActivityKind::Activity => "activity",
        }
    }

    /// Singular title-case label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Transportation => "Transportation",
            ActivityKind::Lodging => "Lodging",
            ActivityKind::Activity => "Activity",
        }
    }

    /// Label for the confirmation/reservation field.
    pub fn confirmation_label(&self) -> &'static str {
        match self {
            ActivityKind::Transportation => "Confirmation",
            ActivityKind::Lodging | ActivityKind::Activity => "Reservation",
        }
    }

    /// Get the kind with a consistent icon prefix for display.
    ///
    /// ```rust
    /// use itinerary_core::models::ActivityKind;
    ///
    /// assert_eq!(ActivityKind::Lodging.with_icon(), "⌂ Lodging");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActivityKind::Transportation => "✈ Transportation",
            ActivityKind::Lodging => "⌂ Lodging",
            ActivityKind::Activity => "★ Activity",
        }
    }

    /// Whether records of this kind carry a custom location.
    pub fn supports_custom_location(&self) -> bool {
        !matches!(self, ActivityKind::Transportation)
    }
}
