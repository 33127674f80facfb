use tracing::info;

use shelter_core::{application::DonationRepository, domain::Donation, error::RegistryResult};

use crate::{
    mapping::{DonationMapper, DonationRecordMapper, MapperStrategy},
    records::DonationRecord,
    storage::RecordStore,
};

/// [`DonationRepository`] over the donations table.
#[derive(Debug, Clone)]
pub struct DonationRepositoryAdapter<S> {
    store: S,
}

impl<S: RecordStore<DonationRecord>> DonationRepositoryAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: RecordStore<DonationRecord>> DonationRepository for DonationRepositoryAdapter<S> {
    fn persist(&self, donation: &Donation) -> RegistryResult<Donation> {
        let record = DonationRecordMapper.convert(Some(donation))?;
        let saved = self.store.save(record)?;
        let stored = DonationMapper.convert(Some(&saved))?;
        info!(donation_id = %stored.id(), amount = stored.amount(), "Donation persisted");
        Ok(stored)
    }
}
