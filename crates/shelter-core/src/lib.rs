//! Shelter registry core - hexagonal architecture.
//!
//! Domain entities, ports and services for a registry of shelters, the
//! users responsible for them, and the donations they receive.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           shelter-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (UserService, ShelterService,          │
//! │   RegistrationService)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (ShelterRepository, UserRepository,    │
//! │   AddressLookup)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    shelter-adapters (Infrastructure)    │
//! │  (records, mapping, storage, lookup)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shelter_core::domain::{Address, Shelter, User, UserProfile};
//!
//! let address = Address::create("Main St", "1", "Centro", "Town", "ST", "00000").unwrap();
//! let user = User::create("Bia", "bia@example.org", Some(UserProfile::Beneficiary), "pw").unwrap();
//! let shelter = Shelter::create("Casa Azul", Some(address), Some(user)).unwrap();
//! assert!(shelter.donations().is_empty());
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AddressService, ApplicationError, DonationService, FailureDetail, RegistrationService,
        ShelterService, UserService,
        ports::{
            AddressLookup, AddressLookupResult, AddressRepository, DonationRepository,
            ShelterRepository, UserRepository,
        },
    };
    pub use crate::domain::{
        Address, DomainError, Donation, IdentifierError, Shelter, User, UserProfile,
    };
    pub use crate::error::{ErrorCategory, RegistryError, RegistryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
