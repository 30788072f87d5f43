//! Organizations, postal addresses and file attachments.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A postal address. Every part is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Address {
    /// True when no part of the address is filled in.
    pub fn is_empty(&self) -> bool {
        self.parts().next().is_none()
    }

    /// Single-line rendering, e.g. `"1 Rue de Rivoli, Paris, 75001, France"`.
    pub fn formatted(&self) -> String {
        self.parts().collect::<Vec<_>>().join(", ")
    }

    fn parts(&self) -> impl Iterator<Item = &str> {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
    }
}

/// A company or venue that provides transportation, lodging or activities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
    pub created_at: Timestamp,
}

/// Reference to a file stored alongside an activity record.
///
/// Only metadata lives on the model; the bytes stay in the store and are
/// fetched on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileAttachment {
    pub id: u64,
    pub file_name: String,
    pub mime_type: String,
    pub file_size: u64,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_formatted_skips_missing_parts() {
        let address = Address {
            street: Some("1 Rue de Rivoli".to_string()),
            city: Some("Paris".to_string()),
            state: None,
            country: Some("France".to_string()),
            postal_code: Some("75001".to_string()),
        };
        assert_eq!(address.formatted(), "1 Rue de Rivoli, Paris, 75001, France");
    }

    #[test]
    fn test_blank_address_is_empty() {
        let address = Address {
            city: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(address.is_empty());
        assert_eq!(address.formatted(), "");
    }
}
