//! The `Shelter` aggregate root.
//!
//! A shelter owns the list of donations it has received. Its address and
//! responsible user are references with their own lifetime; a loaded shelter
//! holds them as they were when it was read from its repository.

use serde::Serialize;

use crate::domain::{
    entities::{Address, Donation, User},
    error::DomainError,
    identifier,
    validation::{require_non_blank, require_present},
};

pub const ID_VALIDATION_FAILURE: &str = "Error while trying to validate the Shelter ID";
pub const ADDRESS_REQUIRED_ERROR: &str = "An address must be provided";
pub const DONATION_REQUIRED_ERROR: &str = "A donation must be provided to add to the shelter";
pub const RESPONSIBLE_REQUIRED_ERROR: &str = "A Shelter must have a responsible user";
pub const SHELTER_NAME_REQUIRED_ERROR: &str = "A reference name must be designated for the shelter";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shelter {
    id: String,
    shelter_name: String,
    address: Address,
    responsible_user: User,
    donations: Vec<Donation>,
}

impl Shelter {
    /// Checks id, name, address and responsible user, in that order. A new
    /// shelter has no donations.
    pub fn new(
        id: impl Into<String>,
        shelter_name: impl Into<String>,
        address: Option<Address>,
        responsible_user: Option<User>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let shelter_name = shelter_name.into();

        identifier::is_valid(&id)
            .map_err(|cause| DomainError::shelter(ID_VALIDATION_FAILURE).caused_by(cause))?;
        require_non_blank(&shelter_name, SHELTER_NAME_REQUIRED_ERROR, DomainError::shelter)?;
        let address = require_present(address, ADDRESS_REQUIRED_ERROR, DomainError::shelter)?;
        let responsible_user = require_present(
            responsible_user,
            RESPONSIBLE_REQUIRED_ERROR,
            DomainError::shelter,
        )?;

        Ok(Self {
            id,
            shelter_name,
            address,
            responsible_user,
            donations: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn shelter_name(&self) -> &str {
        &self.shelter_name
    }
    pub fn address(&self) -> &Address {
        &self.address
    }
    pub fn responsible_user(&self) -> &User {
        &self.responsible_user
    }

    /// Donations in the order they were added.
    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    pub fn change_shelter_name(&mut self, shelter_name: impl Into<String>) -> Result<(), DomainError> {
        let shelter_name = shelter_name.into();
        require_non_blank(&shelter_name, SHELTER_NAME_REQUIRED_ERROR, DomainError::shelter)?;
        self.shelter_name = shelter_name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Option<Address>) -> Result<(), DomainError> {
        self.address = require_present(address, ADDRESS_REQUIRED_ERROR, DomainError::shelter)?;
        Ok(())
    }

    /// Appends a donation. On failure the list is left untouched.
    pub fn add_donation(&mut self, donation: Option<Donation>) -> Result<(), DomainError> {
        let donation = require_present(donation, DONATION_REQUIRED_ERROR, DomainError::shelter)?;
        self.donations.push(donation);
        Ok(())
    }
}
