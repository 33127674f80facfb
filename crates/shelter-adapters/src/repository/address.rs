use tracing::info;

use shelter_core::{application::AddressRepository, domain::Address, error::RegistryResult};

use crate::{
    mapping::{AddressMapper, AddressRecordMapper, MapperStrategy},
    records::AddressRecord,
    storage::RecordStore,
};

/// [`AddressRepository`] over the address table.
#[derive(Debug, Clone)]
pub struct AddressRepositoryAdapter<S> {
    store: S,
}

impl<S: RecordStore<AddressRecord>> AddressRepositoryAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: RecordStore<AddressRecord>> AddressRepository for AddressRepositoryAdapter<S> {
    fn persist(&self, address: &Address) -> RegistryResult<Address> {
        let record = AddressRecordMapper.convert(Some(address))?;
        let saved = self.store.save(record)?;
        let stored = AddressMapper.convert(Some(&saved))?;
        info!(address_id = %stored.id(), zip = %stored.zip(), "Address persisted");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    #[test]
    fn persist_stores_one_record() {
        let store = InMemoryStore::<AddressRecord>::new();
        let repository = AddressRepositoryAdapter::new(store.clone());
        let address = Address::create("Main St", "1", "Centro", "Town", "ST", "00000").unwrap();

        assert_eq!(repository.persist(&address).unwrap(), address);
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(
            store.find_by_id(address.id()).unwrap().map(|r| r.zip),
            Some("00000".to_string())
        );
    }
}
