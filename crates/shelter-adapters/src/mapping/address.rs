use tracing::error;

use shelter_core::{
    application::{ApplicationError, FailureDetail},
    domain::{Address, validation::require_present},
    error::{RegistryError, RegistryResult},
};

use crate::{
    mapping::{MapperStrategy, map_to},
    records::AddressRecord,
};

/// `Address` to `AddressRecord` through the generic engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressRecordMapper;

impl MapperStrategy<Address, AddressRecord> for AddressRecordMapper {
    fn convert(&self, source: Option<&Address>) -> RegistryResult<AddressRecord> {
        let address = require_present(source, "Address", |name| {
            ApplicationError::address_record_term(FailureDetail::ClassMappingFailure, &name)
        })?;
        map_to(address).map_err(|e| -> RegistryError {
            error!(error = %e, "Address could not be mapped for persistence");
            ApplicationError::address_record_term(FailureDetail::AddressMapping, "")
                .with_source(e)
                .into()
        })
    }
}

/// `AddressRecord` back to a validated `Address`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressMapper;

impl MapperStrategy<AddressRecord, Address> for AddressMapper {
    fn convert(&self, source: Option<&AddressRecord>) -> RegistryResult<Address> {
        let record = require_present(source, "AddressRecord", |name| {
            ApplicationError::address_record_term(FailureDetail::ClassMappingFailure, &name)
        })?;
        Address::new(
            &record.id,
            &record.street,
            &record.number,
            &record.neighborhood,
            &record.city,
            &record.state,
            &record.zip,
        )
        .map_err(|e| -> RegistryError {
            error!(error = %e, address_id = %record.id, "Stored address is invalid");
            ApplicationError::address_record_term(FailureDetail::ClassMappingFailure, "AddressRecord")
                .with_source(e)
                .into()
        })
    }
}
