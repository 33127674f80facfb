//! Composition root: turns an [`AppConfig`] into wired services.

use std::sync::Arc;

use tracing::debug;

use shelter_adapters::{
    AddressRepositoryAdapter, DonationRepositoryAdapter, InMemoryStore, JsonFileStore,
    RecordStore, ShelterRepositoryAdapter, StaticAddressLookup, UserRepositoryAdapter,
    records::{AddressRecord, DonationRecord, ShelterRecord, UserRecord},
};
use shelter_core::application::{
    AddressService, DonationService, RegistrationService, ShelterService, UserService,
};

use crate::{
    config::{AppConfig, StorageBackend},
    error::CliResult,
};

/// Every service a command may need, sharing one set of repositories.
pub struct Registry {
    pub users: UserService,
    pub shelters: ShelterService,
    pub addresses: AddressService,
    pub registration: RegistrationService,
}

impl Registry {
    pub fn from_config(config: &AppConfig) -> CliResult<Self> {
        let lookup = match &config.lookup.postal_codes {
            Some(path) => StaticAddressLookup::from_file(path)?,
            None => StaticAddressLookup::new(),
        };

        debug!(
            backend = %config.storage.backend,
            data_dir = %config.storage.data_dir.display(),
            postal_codes = lookup.len(),
            "Wiring registry"
        );

        let registry = match config.storage.backend {
            StorageBackend::Memory => Self::wire(
                InMemoryStore::<UserRecord>::new(),
                InMemoryStore::<ShelterRecord>::new(),
                InMemoryStore::<AddressRecord>::new(),
                InMemoryStore::<DonationRecord>::new(),
                lookup,
            ),
            StorageBackend::Json => {
                let dir = &config.storage.data_dir;
                Self::wire(
                    JsonFileStore::<UserRecord>::open(dir)?,
                    JsonFileStore::<ShelterRecord>::open(dir)?,
                    JsonFileStore::<AddressRecord>::open(dir)?,
                    JsonFileStore::<DonationRecord>::open(dir)?,
                    lookup,
                )
            }
        };
        Ok(registry)
    }

    fn wire<U, S, A, D>(
        users: U,
        shelters: S,
        addresses: A,
        donations: D,
        lookup: StaticAddressLookup,
    ) -> Self
    where
        U: RecordStore<UserRecord> + 'static,
        S: RecordStore<ShelterRecord> + 'static,
        A: RecordStore<AddressRecord> + 'static,
        D: RecordStore<DonationRecord> + 'static,
    {
        let users = Arc::new(users);
        let shelters = Arc::new(shelters);
        let addresses = Arc::new(addresses);

        let user_repository =
            Arc::new(UserRepositoryAdapter::new(users.clone()).referenced_by(shelters.clone()));
        let shelter_repository = Arc::new(ShelterRepositoryAdapter::new(
            shelters,
            users,
            addresses.clone(),
        ));
        let address_repository = Arc::new(AddressRepositoryAdapter::new(addresses));
        let donation_repository = Arc::new(DonationRepositoryAdapter::new(donations));
        let lookup = Arc::new(lookup);

        Self {
            users: UserService::new(user_repository.clone()),
            shelters: ShelterService::new(shelter_repository.clone()),
            addresses: AddressService::new(address_repository.clone(), lookup.clone()),
            registration: RegistrationService::new(
                UserService::new(user_repository),
                ShelterService::new(shelter_repository),
                AddressService::new(address_repository, lookup),
                DonationService::new(donation_repository),
            ),
        }
    }
}
