//! Command handlers: call the itinerary service and render the result.

use anyhow::{Context, Result};
use itinerary_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::ActivityRef,
    params::Id,
    Itinerary, ItineraryError,
};
use log::debug;

use crate::{
    args::{ActivityCommands, AttachmentCommands, OrgCommands, TripCommands},
    renderer::TerminalRenderer,
};

/// Runs one parsed command against an [`Itinerary`].
pub struct Cli {
    itinerary: Itinerary,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(itinerary: Itinerary, renderer: TerminalRenderer) -> Self {
        Self {
            itinerary,
            renderer,
        }
    }

    pub async fn list_trips(&self) -> Result<()> {
        let trips = self
            .itinerary
            .list_trips()
            .await
            .context("Failed to list trips")?;
        self.renderer.show(&trips)
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => {
                let trip = self
                    .itinerary
                    .create_trip(&args.into_params()?)
                    .await
                    .context("Failed to create trip")?;
                self.renderer.show(&CreateResult::new(trip))
            }
            TripCommands::List => self.list_trips().await,
            TripCommands::Show(args) => {
                let id: Id = args.into();
                let trip = self
                    .itinerary
                    .get_trip(&id)
                    .await?
                    .ok_or(ItineraryError::TripNotFound { id: id.id })?;
                self.renderer.show(&trip)
            }
            TripCommands::Update(args) => {
                let trip = self
                    .itinerary
                    .update_trip(&args.into())
                    .await
                    .context("Failed to update trip")?;
                self.renderer.show(&UpdateResult::new(trip))
            }
            TripCommands::Dates(args) => {
                let change = self
                    .itinerary
                    .set_trip_dates(&args.into_params()?)
                    .await
                    .context("Failed to set trip dates")?;
                self.renderer
                    .show(&UpdateResult::with_conflicts(change.trip, change.conflicts))
            }
            TripCommands::Conflicts(args) => {
                let report = self
                    .itinerary
                    .check_trip_dates(&args.into_check()?)
                    .await
                    .context("Failed to check trip dates")?;
                let status = match report {
                    Some(report) => OperationStatus::date_conflicts(&report),
                    None => OperationStatus::success("Trip dates cover all records.".to_string()),
                };
                self.renderer.show(&status)
            }
            TripCommands::Delete(args) => {
                let trip = self
                    .itinerary
                    .delete_trip(&args.into())
                    .await
                    .context("Failed to delete trip")?;
                self.renderer
                    .show(&DeleteResult::with_title(trip.id, "trip", trip.name))
            }
        }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Add(args) => {
                let params = args.into_params()?;
                debug!("Adding {:?} to trip {}", params.kind, params.trip_id);
                let change = self
                    .itinerary
                    .add_activity(&params)
                    .await
                    .context("Failed to add record")?;
                self.renderer.show(&CreateResult::new(change.activity))?;
                if let Some(report) = change.conflicts {
                    let status = OperationStatus::date_conflicts(&report);
                    self.renderer.show(&status)?;
                }
                Ok(())
            }
            ActivityCommands::Edit(args) => {
                let change = self
                    .itinerary
                    .edit_activity(&args.into_params()?)
                    .await
                    .context("Failed to edit record")?;
                self.renderer
                    .show(&UpdateResult::with_conflicts(change.activity, change.conflicts))
            }
            ActivityCommands::Show(args) => {
                let reference: ActivityRef = args.into();
                let record = self
                    .itinerary
                    .get_activity(reference)
                    .await?
                    .ok_or(ItineraryError::ActivityNotFound {
                        kind: reference.kind.label().to_string(),
                        id: reference.id,
                    })?;
                self.renderer.show(&record)
            }
            ActivityCommands::Delete(args) => {
                let reference: ActivityRef = args.into();
                let record = self
                    .itinerary
                    .delete_activity(reference)
                    .await
                    .context("Failed to delete record")?;
                self.renderer.show(&DeleteResult::with_title(
                    record.id(),
                    record.kind().as_str(),
                    record.as_activity().name().to_string(),
                ))
            }
        }
    }

    pub async fn handle_org_command(&self, command: OrgCommands) -> Result<()> {
        match command {
            OrgCommands::Create(args) => {
                let organization = self
                    .itinerary
                    .create_organization(&args.into())
                    .await
                    .context("Failed to create organization")?;
                self.renderer.show(&CreateResult::new(organization))
            }
            OrgCommands::List => {
                let organizations = self.itinerary.list_organizations().await?;
                self.renderer.show(&organizations)
            }
            OrgCommands::Show(args) => {
                let id: Id = args.into();
                let organization = self
                    .itinerary
                    .get_organization(&id)
                    .await?
                    .ok_or(ItineraryError::OrganizationNotFound { id: id.id })?;
                self.renderer.show(&organization)
            }
            OrgCommands::Delete(args) => {
                let organization = self
                    .itinerary
                    .delete_organization(&args.into())
                    .await
                    .context("Failed to delete organization")?;
                self.renderer.show(&DeleteResult::with_title(
                    organization.id,
                    "organization",
                    organization.name,
                ))
            }
        }
    }

    pub async fn handle_attachment_command(&self, command: AttachmentCommands) -> Result<()> {
        match command {
            AttachmentCommands::Add(args) => {
                let attachment = self
                    .itinerary
                    .attach_file(&args.into())
                    .await
                    .context("Failed to attach file")?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Attached {} ({}, {} bytes) with ID: {}",
                    attachment.file_name, attachment.mime_type, attachment.file_size, attachment.id
                )))
            }
            AttachmentCommands::Export(args) => {
                let output = args.output.clone();
                let attachment = self
                    .itinerary
                    .export_attachment(&args.into())
                    .await
                    .context("Failed to export attachment")?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Wrote {} to {}",
                    attachment.file_name,
                    output.display()
                )))
            }
            AttachmentCommands::Delete(args) => {
                let id: Id = args.into();
                self.itinerary
                    .delete_attachment(&id)
                    .await
                    .context("Failed to delete attachment")?;
                self.renderer.show(&DeleteResult::new(id.id, "attachment"))
            }
        }
    }
}
