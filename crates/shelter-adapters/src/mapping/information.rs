use shelter_core::{
    application::{ApplicationError, FailureDetail},
    domain::{Shelter, validation::require_present},
    error::RegistryResult,
};

use crate::{
    dto::{DonationDto, ShelterInformation},
    mapping::{MapperStrategy, map_to},
};

/// `Shelter` to the `ShelterInformation` view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShelterInformationMapper;

impl MapperStrategy<Shelter, ShelterInformation> for ShelterInformationMapper {
    fn convert(&self, source: Option<&Shelter>) -> RegistryResult<ShelterInformation> {
        let shelter = require_present(source, "Shelter", |name| {
            ApplicationError::shelter_record_term(FailureDetail::ClassMappingFailure, &name)
        })?;
        let responsible = shelter.responsible_user();

        Ok(ShelterInformation {
            id: shelter.id().to_string(),
            shelter_name: shelter.shelter_name().to_string(),
            address: map_to(shelter.address())?,
            responsible_name: responsible.user_name().to_string(),
            responsible_email: responsible.email().to_string(),
            donations: shelter
                .donations()
                .iter()
                .map(map_to::<DonationDto, _>)
                .collect::<RegistryResult<_>>()?,
        })
    }
}
