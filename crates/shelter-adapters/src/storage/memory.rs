//! In-memory record store.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use shelter_core::{application::ApplicationError, error::RegistryResult};

use crate::storage::{Record, RecordStore, assign_id};

/// Thread-safe in-memory table. Clones share the same data.
#[derive(Debug, Clone)]
pub struct InMemoryStore<R> {
    records: Arc<RwLock<BTreeMap<String, R>>>,
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// A store pre-filled with `records`.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> RegistryResult<Self> {
        let store = Self::new();
        for record in records {
            store.save(record)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> RegistryResult<usize> {
        let records = self.records.read().map_err(|_| lock_error::<R>())?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error<R: Record>() -> ApplicationError {
    ApplicationError::StoreLockError { table: R::TABLE }
}

impl<R: Record> RecordStore<R> for InMemoryStore<R> {
    fn save(&self, record: R) -> RegistryResult<R> {
        let record = assign_id(record);
        let mut records = self.records.write().map_err(|_| lock_error::<R>())?;
        records.insert(record.id().to_string(), record.clone());
        debug!(table = R::TABLE, id = record.id(), "Record saved");
        Ok(record)
    }

    fn find_by_id(&self, id: &str) -> RegistryResult<Option<R>> {
        let records = self.records.read().map_err(|_| lock_error::<R>())?;
        Ok(records.get(id).cloned())
    }

    fn find_all(&self) -> RegistryResult<Vec<R>> {
        let records = self.records.read().map_err(|_| lock_error::<R>())?;
        Ok(records.values().cloned().collect())
    }

    fn delete(&self, record: &R) -> RegistryResult<()> {
        let mut records = self.records.write().map_err(|_| lock_error::<R>())?;
        if records.remove(record.id()).is_some() {
            debug!(table = R::TABLE, id = record.id(), "Record deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::DonationRecord;
    use shelter_core::error::RegistryError;

    fn donation(id: &str, description: &str) -> DonationRecord {
        DonationRecord {
            id: id.into(),
            description: description.into(),
            amount: Some(1),
        }
    }

    #[test]
    fn save_replaces_by_id() {
        let store = InMemoryStore::<DonationRecord>::new();
        store.save(donation("a", "Rice")).unwrap();
        store.save(donation("a", "Beans")).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(
            store.find_by_id("a").unwrap().map(|d| d.description),
            Some("Beans".to_string())
        );
    }

    #[test]
    fn find_all_is_ordered_by_id() {
        let store =
            InMemoryStore::with_records([donation("b", "Beans"), donation("a", "Rice")]).unwrap();
        let ids: Vec<_> = store.find_all().unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn delete_of_unknown_record_is_a_no_op() {
        let store = InMemoryStore::<DonationRecord>::new();
        store.delete(&donation("missing", "Rice")).unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn clones_share_data() {
        let store = InMemoryStore::<DonationRecord>::new();
        let other = store.clone();
        store.save(donation("a", "Rice")).unwrap();
        assert_eq!(other.len().unwrap(), 1);
    }

    #[test]
    fn poisoned_lock_is_a_lock_error_everywhere() {
        let store = InMemoryStore::<DonationRecord>::new();
        let records = store.records.clone();
        let _ = std::thread::spawn(move || {
            let _guard = records.write().unwrap();
            panic!("writer died");
        })
        .join();

        for err in [
            store.len().unwrap_err(),
            store.find_all().unwrap_err(),
            store.save(donation("a", "Rice")).unwrap_err(),
        ] {
            assert!(matches!(
                err,
                RegistryError::Application(ApplicationError::StoreLockError { table: "donations" })
            ));
        }
    }
}
