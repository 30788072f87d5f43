//! File attachment storage. Metadata and bytes share a row; only the
//! metadata is loaded with records.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::{ActivityRef, FileAttachment},
};

const INSERT_ATTACHMENT_SQL: &str = "INSERT INTO attachments (owner_kind, owner_id, file_name, mime_type, file_size, data, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_OWNER_ATTACHMENTS_SQL: &str = "SELECT id, file_name, mime_type, file_size, created_at FROM attachments WHERE owner_kind = ?1 AND owner_id = ?2 ORDER BY id";
const SELECT_ATTACHMENT_DATA_SQL: &str =
    "SELECT id, file_name, mime_type, file_size, created_at, data FROM attachments WHERE id = ?1";
const DELETE_ATTACHMENT_SQL: &str = "DELETE FROM attachments WHERE id = ?1";

impl super::Database {
    fn build_attachment_from_row(row: &Row) -> rusqlite::Result<FileAttachment> {
        Ok(FileAttachment {
            id: id_column(row, 0)?,
            file_name: row.get(1)?,
            mime_type: row.get(2)?,
            file_size: row.get::<_, i64>(3)? as u64,
            created_at: timestamp_column(row, 4)?,
        })
    }

    /// Stores `data` as a new attachment of the referenced record.
    ///
    /// # Errors
    ///
    /// `ActivityNotFound` if the record does not exist.
    pub fn add_attachment(
        &mut self,
        owner: ActivityRef,
        file_name: &str,
        mime_type: &str,
        data: &[u8],
    ) -> Result<FileAttachment> {
        if !self.activity_exists(owner)? {
            return Err(ItineraryError::ActivityNotFound {
                kind: owner.kind.label().to_string(),
                id: owner.id,
            });
        }

        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_ATTACHMENT_SQL,
                params![
                    owner.kind.as_str(),
                    owner.id as i64,
                    file_name,
                    mime_type,
                    data.len() as i64,
                    data,
                    now.to_string()
                ],
            )
            .db_context("Failed to insert attachment")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Stored attachment {id} ({} bytes) on {owner}", data.len());

        Ok(FileAttachment {
            id,
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            file_size: data.len() as u64,
            created_at: now,
        })
    }

    /// Attachment metadata for one record, oldest first.
    pub fn attachments_for(&self, owner: ActivityRef) -> Result<Vec<FileAttachment>> {
        let mut stmt = self
            .connection
            .prepare_cached(SELECT_OWNER_ATTACHMENTS_SQL)
            .db_context("Failed to prepare query")?;

        let attachments = stmt
            .query_map(
                params![owner.kind.as_str(), owner.id as i64],
                Self::build_attachment_from_row,
            )
            .db_context("Failed to query attachments")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect attachments")?;
        Ok(attachments)
    }

    /// Metadata and bytes of one attachment.
    pub fn attachment_data(&self, id: u64) -> Result<Option<(FileAttachment, Vec<u8>)>> {
        self.connection
            .query_row(SELECT_ATTACHMENT_DATA_SQL, params![id as i64], |row| {
                Ok((
                    Self::build_attachment_from_row(row)?,
                    row.get::<_, Vec<u8>>(5)?,
                ))
            })
            .optional()
            .db_context("Failed to query attachment")
    }

    /// Returns false if the attachment did not exist.
    pub fn delete_attachment(&mut self, id: u64) -> Result<bool> {
        let rows = self
            .connection
            .execute(DELETE_ATTACHMENT_SQL, params![id as i64])
            .db_context("Failed to delete attachment")?;
        Ok(rows > 0)
    }
}
