//! Record storage.
//!
//! A [`RecordStore`] is the storage layer the repository adapters talk to:
//! one table of one record type, with per-operation atomicity. Two backends
//! are provided:
//! - [`InMemoryStore`]: process-local, used by tests and the `memory` CLI
//!   backend.
//! - [`JsonFileStore`]: one JSON document per table under a data directory.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use shelter_core::{domain::identifier, error::RegistryResult};

use crate::records::{AddressRecord, DonationRecord, ShelterRecord, UserRecord};

/// A storable record: keyed by a string id, living in one named table.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const TABLE: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

macro_rules! impl_record {
    ($($record:ty => $table:literal),* $(,)?) => {
        $(
            impl Record for $record {
                const TABLE: &'static str = $table;

                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_record! {
    AddressRecord => "address",
    DonationRecord => "donations",
    UserRecord => "users",
    ShelterRecord => "shelters",
}

/// One table of records.
pub trait RecordStore<R: Record>: Send + Sync {
    /// Insert or replace by id and return what was stored. A record with a
    /// blank id is given a fresh one.
    fn save(&self, record: R) -> RegistryResult<R>;

    fn find_by_id(&self, id: &str) -> RegistryResult<Option<R>>;

    /// All records, ordered by id.
    fn find_all(&self) -> RegistryResult<Vec<R>>;

    /// Remove the record with the same id. Removing an unknown record is not
    /// an error.
    fn delete(&self, record: &R) -> RegistryResult<()>;
}

/// Secondary lookup on the users table.
pub trait UserRecordStore: RecordStore<UserRecord> {
    /// The first user whose email matches exactly.
    fn find_by_email(&self, email: &str) -> RegistryResult<Option<UserRecord>> {
        Ok(self
            .find_all()?
            .into_iter()
            .find(|user| user.email == email))
    }
}

impl<S: RecordStore<UserRecord> + ?Sized> UserRecordStore for S {}

/// Secondary lookup on the shelters table.
pub trait ShelterRecordStore: RecordStore<ShelterRecord> {
    /// The first shelter that references `user_id` as its responsible user.
    fn find_by_responsible_user(&self, user_id: &str) -> RegistryResult<Option<ShelterRecord>> {
        Ok(self
            .find_all()?
            .into_iter()
            .find(|shelter| shelter.responsible_user_id == user_id))
    }
}

impl<S: RecordStore<ShelterRecord> + ?Sized> ShelterRecordStore for S {}

impl<R: Record, S: RecordStore<R> + ?Sized> RecordStore<R> for Arc<S> {
    fn save(&self, record: R) -> RegistryResult<R> {
        (**self).save(record)
    }

    fn find_by_id(&self, id: &str) -> RegistryResult<Option<R>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RegistryResult<Vec<R>> {
        (**self).find_all()
    }

    fn delete(&self, record: &R) -> RegistryResult<()> {
        (**self).delete(record)
    }
}

/// Give `record` a generated id when it has none.
pub(crate) fn assign_id<R: Record>(mut record: R) -> R {
    if record.id().trim().is_empty() {
        record.set_id(identifier::generate());
    }
    record
}
