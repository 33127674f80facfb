//! Shelter conversions. Both directions are explicit compositions of the
//! address, user and donation strategies; the generic engine is not used
//! because every nested part has to be translated on its own.
//!
//! The record side is a [`ShelterRow`]: the shelter record plus the address
//! and user rows its ids point at.

use tracing::error;

use shelter_core::{
    application::{ApplicationError, FailureDetail},
    domain::{
        Shelter,
        validation::{or_empty, require_present},
    },
    error::{RegistryError, RegistryResult},
};

use crate::{
    mapping::{
        AddressMapper, AddressRecordMapper, DonationMapper, DonationRecordMapper, MapperStrategy,
        UserMapper, UserRecordMapper,
    },
    records::{ShelterRecord, ShelterRow},
};

fn class_mapping_failure(name: String) -> ApplicationError {
    ApplicationError::shelter_record_term(FailureDetail::ClassMappingFailure, &name)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShelterRecordMapper;

impl MapperStrategy<Shelter, ShelterRow> for ShelterRecordMapper {
    fn convert(&self, source: Option<&Shelter>) -> RegistryResult<ShelterRow> {
        let shelter = require_present(source, "Shelter", class_mapping_failure)?;
        let build = || -> RegistryResult<ShelterRow> {
            let address = AddressRecordMapper.convert(Some(shelter.address()))?;
            let responsible_user = UserRecordMapper.convert(Some(shelter.responsible_user()))?;
            let donations = shelter
                .donations()
                .iter()
                .map(|donation| DonationRecordMapper.convert(Some(donation)))
                .collect::<RegistryResult<Vec<_>>>()?;
            Ok(ShelterRow {
                shelter: ShelterRecord {
                    id: shelter.id().to_string(),
                    shelter_name: shelter.shelter_name().to_string(),
                    address_id: address.id.clone(),
                    responsible_user_id: responsible_user.id.clone(),
                    donations: Some(donations),
                },
                address: Some(address),
                responsible_user: Some(responsible_user),
            })
        };
        build().map_err(|e| -> RegistryError {
            error!(error = %e, shelter_id = %shelter.id(), "Shelter could not be mapped for persistence");
            class_mapping_failure("Shelter".into()).with_source(e).into()
        })
    }
}

/// A joined [`ShelterRow`] back to a validated `Shelter`, replaying each
/// stored donation through `add_donation` in stored order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShelterMapper;

impl MapperStrategy<ShelterRow, Shelter> for ShelterMapper {
    fn convert(&self, source: Option<&ShelterRow>) -> RegistryResult<Shelter> {
        let row = require_present(source, "ShelterRecord", class_mapping_failure)?;
        let record = &row.shelter;

        let build = || -> RegistryResult<Shelter> {
            let address = AddressMapper.convert(row.address.as_ref())?;
            let user = UserMapper.convert(row.responsible_user.as_ref())?;
            Ok(Shelter::new(
                &record.id,
                &record.shelter_name,
                Some(address),
                Some(user),
            )?)
        };
        let mut shelter = build().map_err(|e| -> RegistryError {
            error!(error = %e, shelter_id = %record.id, "Stored shelter is invalid");
            class_mapping_failure("ShelterRecord".into())
                .with_source(e)
                .into()
        })?;

        for stored in or_empty(record.donations.clone()) {
            let donation = DonationMapper
                .convert(Some(&stored))
                .map_err(|e| class_mapping_failure("Donation".into()).with_source(e))?;
            shelter.add_donation(Some(donation))?;
        }
        Ok(shelter)
    }
}
