use tracing::error;

use shelter_core::{
    application::{ApplicationError, FailureDetail},
    domain::{Donation, validation::require_present},
    error::{RegistryError, RegistryResult},
};

use crate::{
    mapping::{MapperStrategy, map_to},
    records::DonationRecord,
};

fn class_mapping_failure(name: String) -> ApplicationError {
    ApplicationError::donation_record_term(FailureDetail::ClassMappingFailure, &name)
}

/// `Donation` to `DonationRecord` through the generic engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DonationRecordMapper;

impl MapperStrategy<Donation, DonationRecord> for DonationRecordMapper {
    fn convert(&self, source: Option<&Donation>) -> RegistryResult<DonationRecord> {
        let donation = require_present(source, "Donation", class_mapping_failure)?;
        map_to(donation).map_err(|e| -> RegistryError {
            error!(error = %e, "Donation could not be mapped for persistence");
            class_mapping_failure("Donation".into()).with_source(e).into()
        })
    }
}

/// `DonationRecord` back to a validated `Donation`. The amount floor applies
/// again, so a stored non-positive amount reads back as one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DonationMapper;

impl MapperStrategy<DonationRecord, Donation> for DonationMapper {
    fn convert(&self, source: Option<&DonationRecord>) -> RegistryResult<Donation> {
        let record = require_present(source, "DonationRecord", class_mapping_failure)?;
        Donation::new(&record.id, &record.description, record.amount).map_err(
            |e| -> RegistryError {
                error!(error = %e, donation_id = %record.id, "Stored donation is invalid");
                class_mapping_failure("DonationRecord".into())
                    .with_source(e)
                    .into()
            },
        )
    }
}
