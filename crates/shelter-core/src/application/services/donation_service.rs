//! Donation creation and persistence.

use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    application::{
        ApplicationError, FailureDetail, ports::DonationRepository, requests::DonationDetails,
    },
    domain::Donation,
    error::RegistryResult,
};

#[derive(Clone)]
pub struct DonationService {
    repository: Arc<dyn DonationRepository>,
}

impl DonationService {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    pub fn create_donation(&self, description: &str, amount: Option<i32>) -> RegistryResult<Donation> {
        Ok(Donation::create(description, amount)?)
    }

    /// Create a donation from request details and persist it.
    pub fn register_donation(&self, details: &DonationDetails) -> RegistryResult<Donation> {
        let donation = self
            .create_donation(&details.description, details.amount)
            .map_err(|e| {
                error!(error = %e, "Donation rejected");
                ApplicationError::donation_record_term(FailureDetail::DonationValidation, "")
                    .with_source(e)
            })?;

        let stored = self.repository.persist(&donation)?;
        debug!(donation_id = %stored.id(), amount = stored.amount(), "Donation stored");
        Ok(stored)
    }
}
