use std::sync::Arc;

use tracing::{debug, info, warn};

use shelter_core::{
    application::{ApplicationError, FailureDetail, UserRepository},
    domain::User,
    error::RegistryResult,
};

use crate::{
    mapping::{MapperStrategy, UserMapper, UserRecordMapper},
    records::{ShelterRecord, UserRecord},
    repository::{validate_email, validate_id},
    storage::{RecordStore, ShelterRecordStore, UserRecordStore},
};

/// [`UserRepository`] over a users table.
#[derive(Clone)]
pub struct UserRepositoryAdapter<S> {
    store: S,
    shelters: Option<Arc<dyn RecordStore<ShelterRecord>>>,
}

impl<S: RecordStore<UserRecord>> UserRepositoryAdapter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            shelters: None,
        }
    }

    /// Refuse to delete a user while a row in `shelters` names them as its
    /// responsible user.
    pub fn referenced_by(mut self, shelters: Arc<dyn RecordStore<ShelterRecord>>) -> Self {
        self.shelters = Some(shelters);
        self
    }

    fn ensure_unreferenced(&self, id: &str) -> RegistryResult<()> {
        let Some(shelters) = &self.shelters else {
            return Ok(());
        };
        if let Some(shelter) = shelters.find_by_responsible_user(id)? {
            warn!(user_id = id, shelter_id = %shelter.id, "User still runs a shelter");
            return Err(ApplicationError::user_record_term(
                FailureDetail::ResponsibleUserAlreadyInUse,
                "",
            )
            .into());
        }
        Ok(())
    }

    fn record_by_id(&self, id: &str) -> RegistryResult<Option<UserRecord>> {
        validate_id(id, ApplicationError::user_record_term)?;
        self.store.find_by_id(id)
    }
}

impl<S: RecordStore<UserRecord>> UserRepository for UserRepositoryAdapter<S> {
    fn find_by_id(&self, id: &str) -> RegistryResult<Option<User>> {
        self.record_by_id(id)?
            .map(|record| UserMapper.convert(Some(&record)))
            .transpose()
    }

    fn find_all(&self) -> RegistryResult<Vec<User>> {
        self.store
            .find_all()?
            .iter()
            .map(|record| UserMapper.convert(Some(record)))
            .collect()
    }

    fn persist(&self, user: &User) -> RegistryResult<User> {
        let record = UserRecordMapper.convert(Some(user))?;
        let saved = self.store.save(record)?;
        let stored = UserMapper.convert(Some(&saved))?;
        info!(user_id = %stored.id(), profile = %stored.profile(), "User persisted");
        Ok(stored)
    }

    fn delete_by_id(&self, id: &str) -> RegistryResult<()> {
        match self.record_by_id(id)? {
            Some(record) => {
                self.ensure_unreferenced(id)?;
                self.store.delete(&record)?;
                info!(user_id = id, "User deleted");
            }
            None => debug!(user_id = id, "No user to delete"),
        }
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> RegistryResult<Option<User>> {
        validate_email(email, ApplicationError::user_record_term)?;
        self.store
            .find_by_email(email)?
            .map(|record| UserMapper.convert(Some(&record)))
            .transpose()
    }
}
