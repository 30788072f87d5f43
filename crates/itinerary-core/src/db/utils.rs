//! Column conversion helpers shared by the query modules.
//!
//! Instants are stored as RFC 3339 text, money as decimal text, enums by their
//! `as_str()` name and addresses as JSON.

use std::str::FromStr;

use jiff::Timestamp;
use rusqlite::{types::Type, Row};
use rust_decimal::Decimal;

use crate::{
    error::Result,
    models::{ActivityKind, Address},
};

/// Table holding records of the given kind.
pub(crate) fn table_for(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Transportation => "transportation",
        ActivityKind::Lodging => "lodging",
        ActivityKind::Activity => "activities",
    }
}

pub(crate) fn id_column(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

pub(crate) fn optional_id_column(row: &Row, idx: usize) -> rusqlite::Result<Option<u64>> {
    Ok(row.get::<_, Option<i64>>(idx)?.map(|id| id as u64))
}

pub(crate) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn optional_timestamp_column(
    row: &Row,
    idx: usize,
) -> rusqlite::Result<Option<Timestamp>> {
    row.get::<_, Option<String>>(idx)?
        .map(|s| {
            s.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

pub(crate) fn decimal_column(row: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    row.get::<_, String>(idx)?
        .parse::<Decimal>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Parse a text column through the type's `FromStr` impl.
pub(crate) fn parsed_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let text: String = row.get(idx)?;
    text.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into()))
}

pub(crate) fn address_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Address>> {
    row.get::<_, Option<String>>(idx)?
        .map(|json| {
            serde_json::from_str::<Address>(&json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

/// JSON for an address column. Empty addresses are stored as NULL.
pub(crate) fn address_json(address: Option<&Address>) -> Result<Option<String>> {
    match address.filter(|a| !a.is_empty()) {
        Some(address) => Ok(Some(serde_json::to_string(address)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_address_is_stored_as_null() {
        let blank = Address::default();
        assert_eq!(address_json(Some(&blank)).unwrap(), None);
        assert_eq!(address_json(None).unwrap(), None);
    }

    #[test]
    fn test_address_json_keeps_only_present_parts() {
        let address = Address {
            city: Some("Kyoto".to_string()),
            ..Default::default()
        };
        assert_eq!(
            address_json(Some(&address)).unwrap().as_deref(),
            Some(r#"{"city":"Kyoto"}"#)
        );
    }
}
