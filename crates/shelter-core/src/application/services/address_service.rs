//! Address creation, persistence and postal-code lookup.

use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::{
    application::{
        ApplicationError, FailureDetail,
        ports::{AddressLookup, AddressLookupResult, AddressRepository},
        requests::AddressDetails,
        services::tagged,
    },
    domain::{Address, validation::require_non_blank},
    error::RegistryResult,
};

#[derive(Clone)]
pub struct AddressService {
    repository: Arc<dyn AddressRepository>,
    lookup: Arc<dyn AddressLookup>,
}

impl AddressService {
    pub fn new(repository: Arc<dyn AddressRepository>, lookup: Arc<dyn AddressLookup>) -> Self {
        Self { repository, lookup }
    }

    /// Build a new address with a generated id. Nothing is stored.
    pub fn create_address(
        &self,
        street: &str,
        number: &str,
        neighborhood: &str,
        city: &str,
        state: &str,
        zip: &str,
    ) -> RegistryResult<Address> {
        Ok(Address::create(street, number, neighborhood, city, state, zip)?)
    }

    /// Create an address from request details and persist it.
    #[instrument(skip_all, fields(zip = %details.zip))]
    pub fn register_address(&self, details: &AddressDetails) -> RegistryResult<Address> {
        let address = self
            .create_address(
                &details.street,
                &details.number,
                &details.neighborhood,
                &details.city,
                &details.state,
                &details.zip,
            )
            .map_err(|e| {
                error!(error = %e, "Address creation failed");
                ApplicationError::address_record_term(FailureDetail::AddressCreation, "")
                    .with_source(e)
            })?;

        let stored = self.repository.persist(&address)?;
        info!(address_id = %stored.id(), zip = %stored.zip(), "Address registered");
        Ok(stored)
    }

    /// Resolve a postal code through the lookup port.
    pub fn lookup(&self, zip: &str) -> RegistryResult<AddressLookupResult> {
        require_non_blank(
            zip,
            zip,
            tagged(ApplicationError::address_record_term, FailureDetail::InvalidPostalCode),
        )?;
        self.lookup.lookup(zip)
    }
}
