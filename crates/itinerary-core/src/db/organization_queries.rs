//! Organization CRUD operations.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{address_column, address_json, id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Address, Organization},
};

const INSERT_ORGANIZATION_SQL: &str = "INSERT INTO organizations (name, phone, email, website, address, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_ORGANIZATION_SQL: &str =
    "SELECT id, name, phone, email, website, address, created_at FROM organizations WHERE id = ?1";
const SELECT_ORGANIZATIONS_SQL: &str = "SELECT id, name, phone, email, website, address, created_at FROM organizations ORDER BY name COLLATE NOCASE, id";
const CHECK_ORGANIZATION_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM organizations WHERE id = ?1)";
const CLEAR_ORGANIZATION_REFERENCES_SQL: [&str; 3] = [
    "UPDATE transportation SET organization_id = NULL WHERE organization_id = ?1",
    "UPDATE lodging SET organization_id = NULL WHERE organization_id = ?1",
    "UPDATE activities SET organization_id = NULL WHERE organization_id = ?1",
];
const DELETE_ORGANIZATION_SQL: &str = "DELETE FROM organizations WHERE id = ?1";

/// Contact details for a new organization.
#[derive(Debug, Clone, Default)]
pub struct NewOrganization<'a> {
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub website: Option<&'a str>,
    pub address: Option<&'a Address>,
}

impl super::Database {
    fn build_organization_from_row(row: &Row) -> rusqlite::Result<Organization> {
        Ok(Organization {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
            website: row.get(4)?,
            address: address_column(row, 5)?,
            created_at: timestamp_column(row, 6)?,
        })
    }

    pub fn create_organization(&mut self, new: &NewOrganization<'_>) -> Result<Organization> {
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_ORGANIZATION_SQL,
                params![
                    new.name,
                    new.phone,
                    new.email,
                    new.website,
                    address_json(new.address)?,
                    now.to_string()
                ],
            )
            .db_context("Failed to insert organization")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted organization {id}");

        Ok(Organization {
            id,
            name: new.name.to_string(),
            phone: new.phone.map(String::from),
            email: new.email.map(String::from),
            website: new.website.map(String::from),
            address: new.address.filter(|a| !a.is_empty()).cloned(),
            created_at: now,
        })
    }

    pub fn get_organization(&self, id: u64) -> Result<Option<Organization>> {
        self.connection
            .query_row(
                SELECT_ORGANIZATION_SQL,
                params![id as i64],
                Self::build_organization_from_row,
            )
            .optional()
            .db_context("Failed to query organization")
    }

    /// Lists organizations alphabetically.
    pub fn list_organizations(&self) -> Result<Vec<Organization>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ORGANIZATIONS_SQL)
            .db_context("Failed to prepare query")?;

        let organizations = stmt
            .query_map([], Self::build_organization_from_row)
            .db_context("Failed to query organizations")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect organizations")?;
        Ok(organizations)
    }

    pub fn organization_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_ORGANIZATION_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check organization existence")
    }

    /// Deletes an organization and clears every record's reference to it.
    /// Returns false if the organization did not exist.
    pub fn delete_organization(&mut self, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut cleared = 0;
        for sql in CLEAR_ORGANIZATION_REFERENCES_SQL {
            cleared += tx
                .execute(sql, params![id as i64])
                .db_context("Failed to clear organization references")?;
        }
        let rows = tx
            .execute(DELETE_ORGANIZATION_SQL, params![id as i64])
            .db_context("Failed to delete organization")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Deleted organization {id}, cleared {cleared} references");
        Ok(rows > 0)
    }
}
