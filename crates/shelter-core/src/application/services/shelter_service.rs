//! Shelter management over the `ShelterRepository` port.
//!
//! Every mutation loads the shelter, applies the change through the entity
//! (which re-validates) and persists the result.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, FailureDetail, ports::ShelterRepository, services::tagged},
    domain::{
        Address, Donation, Shelter, User, identifier,
        validation::{require_non_blank, require_present},
    },
    error::RegistryResult,
};

pub const INVALID_SHELTER_ID: &str = "The ID given for the shelter is invalid.";
pub const INVALID_SHELTER_NAME: &str = "The given shelter name is invalid.";
pub const ADDRESS_REQUIRED: &str = "The address provided must not be null";
pub const DONATION_REQUIRED: &str = "The donation provided must be valid.";
pub const SHELTER_NOT_FOUND: &str = "Shelter not found";

#[derive(Clone)]
pub struct ShelterService {
    repository: Arc<dyn ShelterRepository>,
}

impl ShelterService {
    pub fn new(repository: Arc<dyn ShelterRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all, fields(shelter_name = %shelter_name))]
    pub fn create_shelter(
        &self,
        shelter_name: &str,
        address: Option<Address>,
        responsible_user: Option<User>,
    ) -> RegistryResult<Shelter> {
        let shelter = Shelter::create(shelter_name, address, responsible_user)?;
        let stored = self.repository.persist(&shelter)?;
        info!(
            shelter_id = %stored.id(),
            responsible = %stored.responsible_user().email(),
            "Shelter created"
        );
        Ok(stored)
    }

    /// `Ok(None)` when no shelter has this id.
    pub fn get_shelter(&self, id: &str) -> RegistryResult<Option<Shelter>> {
        validate_shelter_id(id)?;
        self.repository.find_by_id(id)
    }

    pub fn find_by_responsible_email(&self, email: &str) -> RegistryResult<Option<Shelter>> {
        require_non_blank(
            email,
            email,
            tagged(ApplicationError::shelter_service_term, FailureDetail::InvalidEmail),
        )?;
        self.repository.find_by_responsible_email(email)
    }

    pub fn list_shelters(&self) -> RegistryResult<Vec<Shelter>> {
        self.repository.find_all()
    }

    pub fn change_shelter_name(&self, id: &str, new_name: &str) -> RegistryResult<Shelter> {
        require_non_blank(new_name, INVALID_SHELTER_NAME, ApplicationError::shelter_service)?;
        let mut shelter = self.require_shelter(id)?;
        shelter.change_shelter_name(new_name)?;
        self.repository.persist(&shelter)
    }

    pub fn change_address(&self, id: &str, address: Option<Address>) -> RegistryResult<Shelter> {
        let address = require_present(address, ADDRESS_REQUIRED, ApplicationError::shelter_service)?;
        let mut shelter = self.require_shelter(id)?;
        shelter.change_address(Some(address))?;
        self.repository.persist(&shelter)
    }

    pub fn add_donation(&self, id: &str, donation: Option<Donation>) -> RegistryResult<Shelter> {
        let donation =
            require_present(donation, DONATION_REQUIRED, ApplicationError::shelter_service)?;
        let mut shelter = self.require_shelter(id)?;
        debug!(shelter_id = %id, donation_id = %donation.id(), "Adding donation");
        shelter.add_donation(Some(donation))?;
        self.repository.persist(&shelter)
    }

    pub fn get_donations(&self, id: &str) -> RegistryResult<Vec<Donation>> {
        Ok(self.require_shelter(id)?.donations().to_vec())
    }

    pub fn delete_shelter(&self, id: &str) -> RegistryResult<()> {
        validate_shelter_id(id)?;
        self.repository.delete_by_id(id)?;
        info!(shelter_id = %id, "Shelter deleted");
        Ok(())
    }

    fn require_shelter(&self, id: &str) -> RegistryResult<Shelter> {
        Ok(require_present(
            self.get_shelter(id)?,
            SHELTER_NOT_FOUND,
            ApplicationError::shelter_service,
        )?)
    }
}

fn validate_shelter_id(id: &str) -> RegistryResult<()> {
    require_non_blank(id, INVALID_SHELTER_ID, ApplicationError::shelter_service)?;
    identifier::is_valid(id)
        .map_err(|cause| ApplicationError::shelter_service(INVALID_SHELTER_ID).with_source(cause))?;
    Ok(())
}
