//! A registered `User`: either a donor or a shelter beneficiary.

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    identifier,
    validation::{require_non_blank, require_present},
    value_objects::UserProfile,
};

pub const PROFILE_NOT_PROVIDED: &str = "The user profile must be provided";
pub const USER_ID_REQUIRED: &str = "The user ID must be provided";
pub const EMAIL_NOT_PROVIDED: &str = "The Email must be provided";
pub const PASSWORD_NOT_PROVIDED: &str = "The Password must be provided";

/// "The name of the Donor must not be null or empty", naming the profile.
pub fn user_name_required(profile: UserProfile) -> String {
    format!("The name of the {profile} must not be null or empty")
}

/// A user account.
///
/// Identity, email and profile are fixed at creation; only the name and the
/// password can change, and only to non-blank values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: String,
    user_name: String,
    email: String,
    user_profile: UserProfile,
    user_password: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        email: impl Into<String>,
        profile: Option<UserProfile>,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        // Profile comes first: the name check quotes it.
        let profile = require_present(profile, PROFILE_NOT_PROVIDED, DomainError::user)?;

        let user = Self {
            id: id.into(),
            user_name: user_name.into(),
            email: email.into(),
            user_profile: profile,
            user_password: password.into(),
        };

        require_non_blank(
            &user.user_name,
            &user_name_required(profile),
            DomainError::user,
        )?;
        identifier::is_valid(&user.id)
            .map_err(|cause| DomainError::user(USER_ID_REQUIRED).caused_by(cause))?;
        require_non_blank(&user.email, EMAIL_NOT_PROVIDED, DomainError::user)?;
        require_non_blank(&user.user_password, PASSWORD_NOT_PROVIDED, DomainError::user)?;

        Ok(user)
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub const fn profile(&self) -> UserProfile {
        self.user_profile
    }
    pub fn password(&self) -> &str {
        &self.user_password
    }

    pub fn change_user_password(&mut self, password: impl Into<String>) -> Result<(), DomainError> {
        let password = password.into();
        require_non_blank(&password, PASSWORD_NOT_PROVIDED, DomainError::user)?;
        self.user_password = password;
        Ok(())
    }

    pub fn change_user_name(&mut self, user_name: impl Into<String>) -> Result<(), DomainError> {
        let user_name = user_name.into();
        require_non_blank(
            &user_name,
            &user_name_required(self.user_profile),
            DomainError::user,
        )?;
        self.user_name = user_name;
        Ok(())
    }
}
