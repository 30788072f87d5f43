//! Organization operations for the Itinerary.

use log::info;

use super::{trip_ops::validate_name, Itinerary};
use crate::{
    db::organization_queries::NewOrganization,
    display::Organizations,
    error::{ItineraryError, Result},
    models::Organization,
    params::{CreateOrganization, Id},
};

impl Itinerary {
    pub async fn create_organization(&self, params: &CreateOrganization) -> Result<Organization> {
        let name = validate_name(&params.name)?;
        let params = params.clone();

        let organization = self
            .with_database(move |db, _| {
                db.create_organization(&NewOrganization {
                    name: &name,
                    phone: params.phone.as_deref(),
                    email: params.email.as_deref(),
                    website: params.website.as_deref(),
                    address: params.address.as_ref(),
                })
            })
            .await?;

        info!(
            "Created organization {} ({})",
            organization.id, organization.name
        );
        Ok(organization)
    }

    pub async fn get_organization(&self, params: &Id) -> Result<Option<Organization>> {
        let id = params.id;
        self.with_database(move |db, _| db.get_organization(id))
            .await
    }

    pub async fn list_organizations(&self) -> Result<Organizations> {
        self.with_database(|db, _| Ok(Organizations(db.list_organizations()?)))
            .await
    }

    /// Deletes an organization; records that referenced it keep existing
    /// without an organization.
    pub async fn delete_organization(&self, params: &Id) -> Result<Organization> {
        let id = params.id;

        let organization = self
            .with_database(move |db, _| {
                let organization = db
                    .get_organization(id)?
                    .ok_or(ItineraryError::OrganizationNotFound { id })?;
                db.delete_organization(id)?;
                Ok(organization)
            })
            .await?;

        info!("Deleted organization {id}");
        Ok(organization)
    }
}
