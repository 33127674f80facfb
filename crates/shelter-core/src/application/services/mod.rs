//! Application services - orchestrate use cases.
//!
//! Entity services (`UserService`, `ShelterService`, `AddressService`,
//! `DonationService`) wrap one port each. `RegistrationService` composes them
//! into the onboarding and donation workflows.

pub mod address_service;
pub mod donation_service;
pub mod registration;
pub mod shelter_service;
pub mod user_service;

pub use address_service::AddressService;
pub use donation_service::DonationService;
pub use registration::RegistrationService;
pub use shelter_service::ShelterService;
pub use user_service::UserService;

use crate::application::{ApplicationError, FailureDetail};

/// Failure constructor for the validation guards that tags the error with
/// `detail`. The guard's message becomes the template argument.
pub(crate) fn tagged(
    build: fn(FailureDetail, &str) -> ApplicationError,
    detail: FailureDetail,
) -> impl FnOnce(String) -> ApplicationError {
    move |argument| build(detail, &argument)
}
