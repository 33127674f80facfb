//! Outward-facing data shapes.
//!
//! Most DTOs are filled by the generic mapping engine from a record or an
//! entity; [`ShelterInformation`] needs an explicit strategy.

use serde::{Deserialize, Serialize};

use crate::records::ProfileType;

pub use shelter_core::application::AddressLookupResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressDto {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationDto {
    pub description: String,
    pub amount: Option<i32>,
}

/// A user as shown to others: never carries the password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSummary {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub user_profile: Option<ProfileType>,
}

/// A shelter, its responsible user and what it has received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelterInformation {
    pub id: String,
    pub shelter_name: String,
    pub address: AddressDto,
    pub responsible_name: String,
    pub responsible_email: String,
    pub donations: Vec<DonationDto>,
}
