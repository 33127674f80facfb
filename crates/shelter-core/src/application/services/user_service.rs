//! User management over the `UserRepository` port.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, FailureDetail, ports::UserRepository, services::tagged},
    domain::{
        User, UserProfile, identifier,
        validation::{require_non_blank, require_present},
    },
    error::RegistryResult,
};

pub const INVALID_IDENTIFIER_ERROR: &str =
    "Failed to retrieve the user. The given identifier is invalid";
pub const INVALID_NEW_PASSWORD: &str = "The new password is invalid";
pub const USER_NOT_FOUND: &str = "User not found";
pub const USERNAME_INVALID_ERROR: &str = "The new user name is invalid.";

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Create a user with a generated id and persist it.
    #[instrument(skip_all, fields(email = %email))]
    pub fn create_user(
        &self,
        user_name: &str,
        email: &str,
        profile: Option<UserProfile>,
        password: &str,
    ) -> RegistryResult<User> {
        let user = User::create(user_name, email, profile, password)?;
        let stored = self.repository.persist(&user)?;
        info!(user_id = %stored.id(), "User created");
        Ok(stored)
    }

    /// `Ok(None)` when no user has this id.
    pub fn get_user(&self, id: &str) -> RegistryResult<Option<User>> {
        validate_user_id(id)?;
        self.repository.find_by_id(id)
    }

    pub fn get_user_by_email(&self, email: &str) -> RegistryResult<Option<User>> {
        require_non_blank(
            email,
            email,
            tagged(ApplicationError::user_service_term, FailureDetail::InvalidEmail),
        )?;
        self.repository.find_by_email(email)
    }

    pub fn list_users(&self) -> RegistryResult<Vec<User>> {
        self.repository.find_all()
    }

    /// The new password is checked before the user is loaded.
    pub fn change_password(&self, id: &str, new_password: &str) -> RegistryResult<User> {
        require_non_blank(new_password, INVALID_NEW_PASSWORD, ApplicationError::user_service)?;
        let mut user = self.require_user(id)?;
        user.change_user_password(new_password)?;
        debug!(user_id = %id, "Password changed");
        self.repository.persist(&user)
    }

    pub fn change_user_name(&self, id: &str, new_user_name: &str) -> RegistryResult<User> {
        require_non_blank(new_user_name, USERNAME_INVALID_ERROR, ApplicationError::user_service)?;
        let mut user = self.require_user(id)?;
        user.change_user_name(new_user_name)?;
        debug!(user_id = %id, "User renamed");
        self.repository.persist(&user)
    }

    pub fn delete_user(&self, id: &str) -> RegistryResult<()> {
        validate_user_id(id)?;
        self.repository.delete_by_id(id)?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    fn require_user(&self, id: &str) -> RegistryResult<User> {
        Ok(require_present(self.get_user(id)?, USER_NOT_FOUND, ApplicationError::user_service)?)
    }
}

fn validate_user_id(id: &str) -> RegistryResult<()> {
    require_non_blank(id, INVALID_IDENTIFIER_ERROR, ApplicationError::user_service)?;
    identifier::is_valid(id)
        .map_err(|cause| ApplicationError::user_service(INVALID_IDENTIFIER_ERROR).with_source(cause))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockUserRepository;
    use crate::error::RegistryError;
    use crate::domain::IdentifierError;

    const ID: &str = "5d0c9a3e-2b1f-4e8d-9c7b-6a5f4e3d2c1b";

    fn stored_user() -> User {
        User::new(ID, "Ana", "ana@example.org", Some(UserProfile::Donor), "pw").unwrap()
    }

    fn service(repository: MockUserRepository) -> UserService {
        UserService::new(Arc::new(repository))
    }

    #[test]
    fn create_user_persists() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_persist()
            .times(1)
            .returning(|user| Ok(user.clone()));

        let user = service(repository)
            .create_user("Ana", "ana@example.org", Some(UserProfile::Donor), "pw")
            .unwrap();
        assert_eq!(user.email(), "ana@example.org");
    }

    #[test]
    fn domain_failures_are_not_downgraded() {
        let mut repository = MockUserRepository::new();
        repository.expect_persist().never();

        let err = service(repository)
            .create_user("Ana", "ana@example.org", None, "pw")
            .unwrap_err();
        assert!(matches!(err, RegistryError::Domain(_)));
    }

    #[test]
    fn malformed_id_fails_without_lookup() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().never();

        let err = service(repository).get_user("1234").unwrap_err();
        assert!(err.to_string().contains(INVALID_IDENTIFIER_ERROR));
        assert!(
            err.chain()
                .any(|e| matches!(e, RegistryError::Identifier(IdentifierError::Malformed { .. })))
        );
    }

    #[test]
    fn blank_password_is_checked_before_loading() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().never();

        let err = service(repository).change_password(ID, "").unwrap_err();
        assert!(err.to_string().contains(INVALID_NEW_PASSWORD));
    }

    #[test]
    fn change_password_on_missing_user_reports_not_found() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_persist().never();

        let err = service(repository).change_password(ID, "n3w").unwrap_err();
        assert!(err.to_string().contains(USER_NOT_FOUND));
    }

    #[test]
    fn change_user_name_persists_the_mutation() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_user())));
        repository
            .expect_persist()
            .withf(|user| user.user_name() == "Ana Maria")
            .times(1)
            .returning(|user| Ok(user.clone()));

        let user = service(repository).change_user_name(ID, "Ana Maria").unwrap();
        assert_eq!(user.user_name(), "Ana Maria");
    }

    #[test]
    fn blank_email_lookup_is_tagged() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_email().never();

        let err = service(repository).get_user_by_email("").unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::InvalidEmail));
    }
}
