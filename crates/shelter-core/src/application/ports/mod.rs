//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ShelterRepository`, `UserRepository`: aggregate persistence
//!   - `AddressRepository`, `DonationRepository`: write-side persistence
//!   - `AddressLookup`: postal-code resolution
//!
//! - **Driving (Input) Ports**: the services in `application::services`,
//!   called by the CLI

pub mod output;

pub use output::{
    AddressLookup, AddressLookupResult, AddressRepository, DonationRepository, ShelterRepository,
    UserRepository,
};

#[cfg(test)]
pub use output::{
    MockAddressLookup, MockAddressRepository, MockDonationRepository, MockShelterRepository,
    MockUserRepository,
};
