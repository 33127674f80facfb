//! Repository adapters: the core's persistence ports over a [`RecordStore`].
//!
//! Each adapter holds its store and runs every call in the same order:
//! validate the input without touching storage, map the entity to a record,
//! make the storage call, then map the stored record back through its
//! validating strategy.
//!
//! [`RecordStore`]: crate::storage::RecordStore

pub mod address;
pub mod donation;
pub mod shelter;
pub mod user;

pub use address::AddressRepositoryAdapter;
pub use donation::DonationRepositoryAdapter;
pub use shelter::ShelterRepositoryAdapter;
pub use user::UserRepositoryAdapter;

use tracing::warn;

use shelter_core::{
    application::{ApplicationError, FailureDetail},
    domain::{IdentifierError, identifier, validation::require_non_blank},
    error::{RegistryError, RegistryResult},
};

/// Builds the adapter-specific failure for a term and its argument.
pub(crate) type Failure = fn(FailureDetail, &str) -> ApplicationError;

/// Reject a blank id (term 19) or a malformed one (term 6). The identifier
/// error is kept as the cause.
pub(crate) fn validate_id(id: &str, failure: Failure) -> RegistryResult<()> {
    identifier::is_valid(id)
        .map(|_| ())
        .map_err(|e| -> RegistryError {
            warn!(id, error = %e, "Rejected identifier");
            let outer = match &e {
                IdentifierError::Missing => failure(FailureDetail::InvalidId, ""),
                IdentifierError::Malformed { value } => {
                    failure(FailureDetail::InvalidUuidFormat, value)
                }
            };
            outer.with_source(e).into()
        })
}

/// Reject a blank email lookup key (term 29).
pub(crate) fn validate_email(email: &str, failure: Failure) -> RegistryResult<()> {
    require_non_blank(email, "", |_| failure(FailureDetail::InvalidEmail, ""))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_id_is_term_19_with_missing_cause() {
        let err = validate_id(" ", ApplicationError::shelter_record_term).unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::InvalidId));
        assert!(matches!(
            err.root_cause(),
            RegistryError::Identifier(IdentifierError::Missing)
        ));
    }

    #[test]
    fn malformed_id_is_term_6_naming_the_value() {
        let err = validate_id("not-a-uuid", ApplicationError::user_record_term).unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::InvalidUuidFormat));
        assert!(err.to_string().contains("The ID not-a-uuid must be in UUID format"));
        assert!(err.to_string().starts_with("Application error: User record failure"));
    }

    #[test]
    fn blank_email_is_term_29() {
        let err = validate_email("", ApplicationError::user_record_term).unwrap_err();
        assert_eq!(err.detail(), Some(FailureDetail::InvalidEmail));
        assert!(validate_email("a@example.org", ApplicationError::user_record_term).is_ok());
    }
}
