//! Numbered failure terms.
//!
//! Every application-level failure that reaches a user is tagged with a term
//! and rendered as `T%03dF - <message>`, e.g. `T004F - Failed to map class
//! [ AddressRecord ].` Terms are stable; clients may match on them.

use std::fmt;

use crate::error::ErrorCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureDetail {
    Unknown,
    ConstructorDefaultUndefined,
    InvalidRegistrationRequest,
    ClassMappingFailure,
    ShelterCreation,
    InvalidUuidFormat,
    ResponsibleUserProfileInvalid,
    EmailNotFound,
    ResponsibleUserAlreadyInUse,
    EmailAlreadyInUse,
    ResponsibleEmailNotFound,
    PostalCodeLookupFailure,
    DonationValidation,
    EmptyDonationList,
    ResponsibleEmailNotAssociated,
    InvalidId,
    ShelterRequired,
    AddressCreation,
    AddressMapping,
    MissingUserRegistration,
    InvalidEmail,
    UserCreationFailure,
    UserProfileValidation,
    UserRequired,
    InvalidPostalCode,
}

impl FailureDetail {
    pub const ALL: [FailureDetail; 25] = [
        Self::Unknown,
        Self::ConstructorDefaultUndefined,
        Self::InvalidRegistrationRequest,
        Self::ClassMappingFailure,
        Self::ShelterCreation,
        Self::InvalidUuidFormat,
        Self::ResponsibleUserProfileInvalid,
        Self::EmailNotFound,
        Self::ResponsibleUserAlreadyInUse,
        Self::EmailAlreadyInUse,
        Self::ResponsibleEmailNotFound,
        Self::PostalCodeLookupFailure,
        Self::DonationValidation,
        Self::EmptyDonationList,
        Self::ResponsibleEmailNotAssociated,
        Self::InvalidId,
        Self::ShelterRequired,
        Self::AddressCreation,
        Self::AddressMapping,
        Self::MissingUserRegistration,
        Self::InvalidEmail,
        Self::UserCreationFailure,
        Self::UserProfileValidation,
        Self::UserRequired,
        Self::InvalidPostalCode,
    ];

    pub const fn term(self) -> u16 {
        match self {
            Self::Unknown => 1,
            Self::ConstructorDefaultUndefined => 2,
            Self::InvalidRegistrationRequest => 3,
            Self::ClassMappingFailure => 4,
            Self::ShelterCreation => 5,
            Self::InvalidUuidFormat => 6,
            Self::ResponsibleUserProfileInvalid => 7,
            Self::EmailNotFound => 8,
            Self::ResponsibleUserAlreadyInUse => 9,
            Self::EmailAlreadyInUse => 10,
            Self::ResponsibleEmailNotFound => 11,
            Self::PostalCodeLookupFailure => 12,
            Self::DonationValidation => 13,
            Self::EmptyDonationList => 15,
            Self::ResponsibleEmailNotAssociated => 17,
            Self::InvalidId => 19,
            Self::ShelterRequired => 21,
            Self::AddressCreation => 23,
            Self::AddressMapping => 25,
            Self::MissingUserRegistration => 27,
            Self::InvalidEmail => 29,
            Self::UserCreationFailure => 31,
            Self::UserProfileValidation => 33,
            Self::UserRequired => 35,
            Self::InvalidPostalCode => 37,
        }
    }

    /// Message template; `{}` marks where [`FailureDetail::render`] puts its argument.
    pub const fn template(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::ConstructorDefaultUndefined => "Class [ {} ] must declare a default constructor.",
            Self::InvalidRegistrationRequest => {
                "Please provide a correctly filled shelter creation request."
            }
            Self::ClassMappingFailure => "Failed to map class [ {} ].",
            Self::ShelterCreation => {
                "Error creating a Shelter. Please confirm all shelter fields are filled in correctly and try again."
            }
            Self::InvalidUuidFormat => "The ID {} must be in UUID format",
            Self::ResponsibleUserProfileInvalid => {
                "The user must have the beneficiary profile to be responsible for a shelter."
            }
            Self::EmailNotFound => "Could not find a user with the email {} .",
            Self::ResponsibleUserAlreadyInUse => {
                "This user is already responsible for another shelter."
            }
            Self::EmailAlreadyInUse => {
                "Sorry, the email address {} is already associated with an existing account. Please try a different email."
            }
            Self::ResponsibleEmailNotFound => {
                "We could not find the responsible user's email. Please try again."
            }
            Self::PostalCodeLookupFailure => "Failed to retrieve the address for postal code {}.",
            Self::DonationValidation => "Registering donations requires valid and complete information.",
            Self::EmptyDonationList => "There are no donations listed so far.",
            Self::ResponsibleEmailNotAssociated => {
                "Please check that the responsible user's email is correct and associated with a shelter."
            }
            Self::InvalidId => "A valid ID must be provided!",
            Self::ShelterRequired => "A valid Shelter object must be provided for persistence!",
            Self::AddressCreation => {
                "Error creating the address. Confirm that all address fields are correct and try again."
            }
            Self::AddressMapping => "Error while mapping the address for persistence",
            Self::MissingUserRegistration => {
                "Please provide a correctly filled user creation request."
            }
            Self::InvalidEmail => "No email was given. Please provide a valid email.",
            Self::UserCreationFailure => {
                "Creating the new user did not succeed. Please make sure your data is correct and try again."
            }
            Self::UserProfileValidation => "Validation of the given user profile failed.",
            Self::UserRequired => "A valid user is required for persistence.",
            Self::InvalidPostalCode => "The postal code {} is not valid.",
        }
    }

    /// `T%03dF - ` followed by the template with `{}` replaced by `argument`.
    pub fn render(self, argument: &str) -> String {
        format!("{} - {}", self.code(), self.template().replacen("{}", argument, 1))
    }

    /// The rendered message for templates without an argument.
    pub fn message(self) -> String {
        self.render("")
    }

    /// The `T%03dF` tag on its own.
    pub fn code(self) -> String {
        format!("T{:03}F", self.term())
    }

    /// Unknown terms fall back to [`FailureDetail::Unknown`].
    pub fn from_term(term: u16) -> Self {
        Self::ALL
            .into_iter()
            .find(|detail| detail.term() == term)
            .unwrap_or(Self::Unknown)
    }

    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::Unknown | Self::ConstructorDefaultUndefined => ErrorCategory::Internal,
            Self::EmailNotFound
            | Self::ResponsibleEmailNotFound
            | Self::ResponsibleEmailNotAssociated => ErrorCategory::NotFound,
            Self::PostalCodeLookupFailure => ErrorCategory::External,
            _ => ErrorCategory::Validation,
        }
    }
}

impl fmt::Display for FailureDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
