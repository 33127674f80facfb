//! Application layer of the shelter registry.
//!
//! This layer contains:
//! - **Services**: use case orchestration (user, shelter, registration)
//! - **Ports**: traits for persistence and postal-code lookup
//! - **Errors**: `ApplicationError` and the numbered `FailureDetail` terms
//!
//! Business rules stay in `crate::domain`; services only sequence them and
//! enforce the rules that span several entities.

pub mod error;
pub mod failure;
pub mod ports;
pub mod requests;
pub mod services;

pub use services::{
    AddressService, DonationService, RegistrationService, ShelterService, UserService,
};

pub use ports::{
    AddressLookup, AddressLookupResult, AddressRepository, DonationRepository, ShelterRepository,
    UserRepository,
};

pub use error::ApplicationError;
pub use failure::FailureDetail;
pub use requests::{
    AddressDetails, DonationDetails, DonationReceipt, ShelterRegistration, UserRegistration,
};
