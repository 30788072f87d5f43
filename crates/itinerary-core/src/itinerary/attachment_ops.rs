//! File attachment operations for the Itinerary.

use std::path::Path;

use log::info;

use super::{activity_ops::not_found, Itinerary};
use crate::{
    error::{ItineraryError, Result},
    models::FileAttachment,
    params::{AttachFile, ExportAttachment, Id},
};

impl Itinerary {
    /// Reads a file from disk and stores it on an activity record.
    pub async fn attach_file(&self, params: &AttachFile) -> Result<FileAttachment> {
        let params = params.clone();
        let file_name = match &params.file_name {
            Some(name) => name.clone(),
            None => params
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    ItineraryError::invalid_input("path").with_reason("path has no file name")
                })?,
        };
        let mime_type = mime_type_for(Path::new(&file_name));

        let attachment = self
            .with_database(move |db, _| {
                if !db.activity_exists(params.target)? {
                    return Err(not_found(params.target));
                }
                let data = std::fs::read(&params.path).map_err(|e| ItineraryError::FileSystem {
                    path: params.path.clone(),
                    source: e,
                })?;
                db.add_attachment(params.target, &file_name, &mime_type, &data)
            })
            .await?;

        info!(
            "Attached {} ({} bytes) as attachment {}",
            attachment.file_name, attachment.file_size, attachment.id
        );
        Ok(attachment)
    }

    /// Writes an attachment's bytes to `output`.
    pub async fn export_attachment(&self, params: &ExportAttachment) -> Result<FileAttachment> {
        let params = params.clone();

        self.with_database(move |db, _| {
            let (attachment, data) = db
                .attachment_data(params.id)?
                .ok_or(ItineraryError::AttachmentNotFound { id: params.id })?;
            std::fs::write(&params.output, data).map_err(|e| ItineraryError::FileSystem {
                path: params.output.clone(),
                source: e,
            })?;
            Ok(attachment)
        })
        .await
    }

    pub async fn delete_attachment(&self, params: &Id) -> Result<()> {
        let id = params.id;
        let deleted = self
            .with_database(move |db, _| db.delete_attachment(id))
            .await?;
        if !deleted {
            return Err(ItineraryError::AttachmentNotFound { id });
        }
        info!("Deleted attachment {id}");
        Ok(())
    }
}

/// Guess a MIME type from the file extension.
pub fn mime_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_for_common_documents() {
        assert_eq!(mime_type_for(Path::new("ticket.PDF")), "application/pdf");
        assert_eq!(mime_type_for(Path::new("boarding.jpeg")), "image/jpeg");
        assert_eq!(
            mime_type_for(Path::new("README")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_mime_type_for_less_common_extensions() {
        assert_eq!(mime_type_for(Path::new("expenses.csv")), "text/csv");
        assert_eq!(mime_type_for(Path::new("route.svg")), "image/svg+xml");
        assert_eq!(mime_type_for(Path::new("reservation.ics")), "text/calendar");
    }
}
