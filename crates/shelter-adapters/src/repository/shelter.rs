use tracing::{debug, info, warn};

use shelter_core::{
    application::{ApplicationError, FailureDetail, ShelterRepository},
    domain::Shelter,
    error::RegistryResult,
};

use crate::{
    mapping::{MapperStrategy, ShelterMapper, ShelterRecordMapper},
    records::{AddressRecord, ShelterRecord, ShelterRow, UserRecord},
    repository::{validate_email, validate_id},
    storage::{RecordStore, ShelterRecordStore, UserRecordStore},
};

/// [`ShelterRepository`] over a shelters table.
///
/// A shelter row holds the ids of its address and responsible user. Reads
/// resolve both through their own tables, so a shelter always shows the
/// current state of the user who runs it.
#[derive(Debug, Clone)]
pub struct ShelterRepositoryAdapter<S, U, A> {
    shelters: S,
    users: U,
    addresses: A,
}

impl<S, U, A> ShelterRepositoryAdapter<S, U, A>
where
    S: RecordStore<ShelterRecord>,
    U: RecordStore<UserRecord>,
    A: RecordStore<AddressRecord>,
{
    pub fn new(shelters: S, users: U, addresses: A) -> Self {
        Self {
            shelters,
            users,
            addresses,
        }
    }

    fn record_by_id(&self, id: &str) -> RegistryResult<Option<ShelterRecord>> {
        validate_id(id, ApplicationError::shelter_record_term)?;
        self.shelters.find_by_id(id)
    }

    fn resolve(&self, shelter: ShelterRecord) -> RegistryResult<Shelter> {
        let row = ShelterRow {
            address: self.addresses.find_by_id(&shelter.address_id)?,
            responsible_user: self.users.find_by_id(&shelter.responsible_user_id)?,
            shelter,
        };
        ShelterMapper.convert(Some(&row))
    }
}

impl<S, U, A> ShelterRepository for ShelterRepositoryAdapter<S, U, A>
where
    S: RecordStore<ShelterRecord>,
    U: RecordStore<UserRecord>,
    A: RecordStore<AddressRecord>,
{
    fn find_by_id(&self, id: &str) -> RegistryResult<Option<Shelter>> {
        self.record_by_id(id)?
            .map(|record| self.resolve(record))
            .transpose()
    }

    fn find_all(&self) -> RegistryResult<Vec<Shelter>> {
        self.shelters
            .find_all()?
            .into_iter()
            .map(|record| self.resolve(record))
            .collect()
    }

    /// Writes the shelter row and its address row. The responsible user is
    /// only referenced and must already be stored.
    fn persist(&self, shelter: &Shelter) -> RegistryResult<Shelter> {
        let row = ShelterRecordMapper.convert(Some(shelter))?;
        if self
            .users
            .find_by_id(&row.shelter.responsible_user_id)?
            .is_none()
        {
            warn!(
                shelter_id = %shelter.id(),
                user_id = %row.shelter.responsible_user_id,
                "Responsible user is not stored"
            );
            return Err(ApplicationError::shelter_record_term(
                FailureDetail::ResponsibleEmailNotFound,
                "",
            )
            .into());
        }
        if let Some(address) = row.address {
            self.addresses.save(address)?;
        }

        let saved = self.shelters.save(row.shelter)?;
        let stored = self.resolve(saved)?;
        info!(shelter_id = %stored.id(), donations = stored.donations().len(), "Shelter persisted");
        Ok(stored)
    }

    fn delete_by_id(&self, id: &str) -> RegistryResult<()> {
        match self.record_by_id(id)? {
            Some(record) => {
                self.shelters.delete(&record)?;
                info!(shelter_id = id, "Shelter deleted");
            }
            None => debug!(shelter_id = id, "No shelter to delete"),
        }
        Ok(())
    }

    fn find_by_responsible_email(&self, email: &str) -> RegistryResult<Option<Shelter>> {
        validate_email(email, ApplicationError::shelter_record_term)?;
        let Some(user) = self.users.find_by_email(email)? else {
            debug!(email, "No user with this email");
            return Ok(None);
        };
        self.shelters
            .find_by_responsible_user(&user.id)?
            .map(|record| self.resolve(record))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mapping::UserRecordMapper, storage::InMemoryStore};
    use shelter_core::domain::{Address, Donation, User, UserProfile};

    type Repository = ShelterRepositoryAdapter<
        InMemoryStore<ShelterRecord>,
        InMemoryStore<UserRecord>,
        InMemoryStore<AddressRecord>,
    >;

    struct Tables {
        repository: Repository,
        users: InMemoryStore<UserRecord>,
        addresses: InMemoryStore<AddressRecord>,
    }

    fn tables() -> Tables {
        let users = InMemoryStore::new();
        let addresses = InMemoryStore::new();
        Tables {
            repository: ShelterRepositoryAdapter::new(
                InMemoryStore::new(),
                users.clone(),
                addresses.clone(),
            ),
            users,
            addresses,
        }
    }

    impl Tables {
        /// A shelter whose responsible user is already in the users table.
        fn shelter(&self, email: &str) -> Shelter {
            let address = Address::create("Main St", "1", "Centro", "Town", "ST", "00000").unwrap();
            let user = User::create("Bia", email, Some(UserProfile::Beneficiary), "pw").unwrap();
            self.users
                .save(UserRecordMapper.convert(Some(&user)).unwrap())
                .unwrap();
            Shelter::create("Casa", Some(address), Some(user)).unwrap()
        }
    }

    #[test]
    fn persist_then_find_returns_an_equal_shelter() {
        let tables = tables();
        let mut original = tables.shelter("bia@example.org");
        original
            .add_donation(Some(Donation::create("Rice", Some(4)).unwrap()))
            .unwrap();

        let stored = tables.repository.persist(&original).unwrap();
        assert_eq!(stored, original);
        assert_eq!(
            tables.repository.find_by_id(original.id()).unwrap(),
            Some(original)
        );
    }

    #[test]
    fn persist_writes_the_address_row_but_not_the_user() {
        let tables = tables();
        let shelter = tables.shelter("bia@example.org");
        tables.repository.persist(&shelter).unwrap();

        assert_eq!(tables.addresses.len().unwrap(), 1);
        assert!(
            tables
                .addresses
                .find_by_id(shelter.address().id())
                .unwrap()
                .is_some()
        );
        assert_eq!(tables.users.len().unwrap(), 1);
    }

    #[test]
    fn reads_follow_the_current_user_row() {
        let tables = tables();
        let shelter = tables.shelter("bia@example.org");
        tables.repository.persist(&shelter).unwrap();

        let mut user = tables
            .users
            .find_by_id(shelter.responsible_user().id())
            .unwrap()
            .unwrap();
        user.user_name = "Beatriz".into();
        tables.users.save(user).unwrap();

        let found = tables.repository.find_by_id(shelter.id()).unwrap().unwrap();
        assert_eq!(found.responsible_user().user_name(), "Beatriz");
    }

    #[test]
    fn unstored_responsible_user_is_rejected() {
        let tables = tables();
        let address = Address::create("Main St", "1", "Centro", "Town", "ST", "00000").unwrap();
        let user =
            User::create("Bia", "bia@example.org", Some(UserProfile::Beneficiary), "pw").unwrap();
        let shelter = Shelter::create("Casa", Some(address), Some(user)).unwrap();

        let err = tables.repository.persist(&shelter).unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::ResponsibleEmailNotFound));
        assert!(tables.repository.find_all().unwrap().is_empty());
        assert!(tables.addresses.is_empty().unwrap());
    }

    #[test]
    fn unknown_well_formed_id_is_absent() {
        assert_eq!(
            tables()
                .repository
                .find_by_id("00000000-0000-4000-8000-000000000000")
                .unwrap(),
            None
        );
    }

    #[test]
    fn delete_is_idempotent() {
        let tables = tables();
        let stored = tables
            .repository
            .persist(&tables.shelter("bia@example.org"))
            .unwrap();

        tables.repository.delete_by_id(stored.id()).unwrap();
        tables.repository.delete_by_id(stored.id()).unwrap();
        assert!(tables.repository.find_all().unwrap().is_empty());
    }

    #[test]
    fn delete_validates_the_id() {
        let err = tables().repository.delete_by_id("").unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::InvalidId));
    }

    #[test]
    fn finds_by_responsible_email_through_the_users_table() {
        let tables = tables();
        tables
            .repository
            .persist(&tables.shelter("bia@example.org"))
            .unwrap();
        tables
            .repository
            .persist(&tables.shelter("caio@example.org"))
            .unwrap();

        let found = tables
            .repository
            .find_by_responsible_email("caio@example.org")
            .unwrap()
            .unwrap();
        assert_eq!(found.responsible_user().email(), "caio@example.org");
        assert_eq!(tables.repository.find_all().unwrap().len(), 2);
        assert!(
            tables
                .repository
                .find_by_responsible_email("nobody@example.org")
                .unwrap()
                .is_none()
        );
        assert_eq!(
            tables
                .repository
                .find_by_responsible_email(" ")
                .unwrap_err()
                .detail(),
            Some(FailureDetail::InvalidEmail)
        );
    }

    #[test]
    fn invalid_stored_record_fails_find_all() {
        let tables = tables();
        tables
            .repository
            .shelters
            .save(ShelterRecord {
                shelter_name: "Broken".into(),
                ..ShelterRecord::default()
            })
            .unwrap();

        let err = tables.repository.find_all().unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::ClassMappingFailure));
    }
}
