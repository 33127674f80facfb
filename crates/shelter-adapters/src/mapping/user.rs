use tracing::error;

use shelter_core::{
    application::{ApplicationError, FailureDetail},
    domain::{User, UserProfile, validation::require_present},
    error::{RegistryError, RegistryResult},
};

use crate::{
    mapping::{MapperStrategy, map_to},
    records::{ProfileType, UserRecord},
};

fn class_mapping_failure(name: String) -> ApplicationError {
    ApplicationError::user_record_term(FailureDetail::ClassMappingFailure, &name)
}

/// Translate a domain profile to the persistence enum by name.
pub fn to_profile_type(profile: UserProfile) -> RegistryResult<ProfileType> {
    Ok(require_present(
        ProfileType::from_name(profile.name()),
        "",
        |_| ApplicationError::user_record_term(FailureDetail::UserProfileValidation, ""),
    )?)
}

/// Translate a persistence profile to the domain enum by name.
pub fn to_user_profile(profile: ProfileType) -> RegistryResult<UserProfile> {
    Ok(require_present(
        UserProfile::from_name(profile.name()),
        "",
        |_| ApplicationError::user_record_term(FailureDetail::UserProfileValidation, ""),
    )?)
}

/// `User` to `UserRecord`: generic copy, then the profile is set explicitly
/// through its name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRecordMapper;

impl MapperStrategy<User, UserRecord> for UserRecordMapper {
    fn convert(&self, source: Option<&User>) -> RegistryResult<UserRecord> {
        let user = require_present(source, "User", class_mapping_failure)?;
        let build = || -> RegistryResult<UserRecord> {
            let mut record: UserRecord = map_to(user)?;
            record.user_profile = Some(to_profile_type(user.profile())?);
            Ok(record)
        };
        build().map_err(|e| -> RegistryError {
            error!(error = %e, "User could not be mapped for persistence");
            class_mapping_failure("User".into()).with_source(e).into()
        })
    }
}

/// `UserRecord` back to a validated `User`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl MapperStrategy<UserRecord, User> for UserMapper {
    fn convert(&self, source: Option<&UserRecord>) -> RegistryResult<User> {
        let record = require_present(source, "UserRecord", class_mapping_failure)?;
        let profile = record.user_profile.map(to_user_profile).transpose()?;
        User::new(
            &record.id,
            &record.user_name,
            &record.email,
            profile,
            &record.user_password,
        )
        .map_err(|e| -> RegistryError {
            error!(error = %e, user_id = %record.id, "Stored user is invalid");
            class_mapping_failure("UserRecord".into()).with_source(e).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "7a6b5c4d-3e2f-4a1b-9c8d-7e6f5a4b3c2d";

    fn user(profile: UserProfile) -> User {
        User::new(ID, "Bia", "bia@example.org", Some(profile), "pw").unwrap()
    }

    #[test]
    fn profile_is_translated_by_name() {
        for (profile, expected) in [
            (UserProfile::Donor, ProfileType::Donor),
            (UserProfile::Beneficiary, ProfileType::Beneficiary),
        ] {
            let record = UserRecordMapper.convert(Some(&user(profile))).unwrap();
            assert_eq!(record.user_profile, Some(expected));
            assert_eq!(record.user_password, "pw");
            assert_eq!(UserMapper.convert(Some(&record)).unwrap(), user(profile));
        }
    }

    #[test]
    fn record_without_profile_fails_construction() {
        let record = UserRecord {
            user_profile: None,
            ..UserRecordMapper
                .convert(Some(&user(UserProfile::Donor)))
                .unwrap()
        };
        let err = UserMapper.convert(Some(&record)).unwrap_err();
        assert_eq!(
            err.domain_cause().map(|d| d.reason()),
            Some(shelter_core::domain::entities::user::PROFILE_NOT_PROVIDED)
        );
    }

    #[test]
    fn absent_user_is_a_user_record_failure() {
        let err = UserRecordMapper.convert(None).unwrap_err();
        assert!(err.to_string().contains("User record failure"));
        assert!(err.to_string().contains("[ User ]"));
    }
}
