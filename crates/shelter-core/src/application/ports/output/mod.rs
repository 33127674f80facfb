//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from persistence and from
//! the postal-code lookup. The `shelter-adapters` crate provides
//! implementations.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Donation, Shelter, User};
use crate::error::RegistryResult;

/// Persistence for shelters.
///
/// Implemented by `shelter_adapters::repository::ShelterRepositoryAdapter`.
///
/// Ids passed to `find_by_id` and `delete_by_id` are validated before any
/// storage access: a blank or malformed id is an error, not an empty result.
#[cfg_attr(test, mockall::automock)]
pub trait ShelterRepository: Send + Sync {
    /// `Ok(None)` when the id is well-formed but unknown.
    fn find_by_id(&self, id: &str) -> RegistryResult<Option<Shelter>>;

    fn find_all(&self) -> RegistryResult<Vec<Shelter>>;

    /// Insert or update, returning the shelter as it was stored.
    fn persist(&self, shelter: &Shelter) -> RegistryResult<Shelter>;

    /// Idempotent: deleting an unknown id succeeds.
    fn delete_by_id(&self, id: &str) -> RegistryResult<()>;

    fn find_by_responsible_email(&self, email: &str) -> RegistryResult<Option<Shelter>>;
}

/// Persistence for users. Same contract as [`ShelterRepository`].
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> RegistryResult<Option<User>>;

    fn find_all(&self) -> RegistryResult<Vec<User>>;

    fn persist(&self, user: &User) -> RegistryResult<User>;

    fn delete_by_id(&self, id: &str) -> RegistryResult<()>;

    fn find_by_email(&self, email: &str) -> RegistryResult<Option<User>>;
}

/// Write-side persistence for addresses created during shelter registration.
#[cfg_attr(test, mockall::automock)]
pub trait AddressRepository: Send + Sync {
    fn persist(&self, address: &Address) -> RegistryResult<Address>;
}

/// Write-side persistence for received donations.
#[cfg_attr(test, mockall::automock)]
pub trait DonationRepository: Send + Sync {
    fn persist(&self, donation: &Donation) -> RegistryResult<Donation>;
}

/// Resolves a postal code to a partial address.
///
/// Implemented by `shelter_adapters::lookup::StaticAddressLookup`.
#[cfg_attr(test, mockall::automock)]
pub trait AddressLookup: Send + Sync {
    fn lookup(&self, zip: &str) -> RegistryResult<AddressLookupResult>;
}

/// The flat record returned by a postal-code lookup. The house number is
/// never known from a postal code alone.
///
/// Accepts the field names of the public Brazilian postal-code API as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressLookupResult {
    #[serde(alias = "cep")]
    pub zip: String,
    #[serde(alias = "logradouro")]
    pub street: String,
    #[serde(alias = "bairro")]
    pub neighborhood: String,
    #[serde(alias = "localidade")]
    pub city: String,
    #[serde(alias = "uf")]
    pub state: String,
}
