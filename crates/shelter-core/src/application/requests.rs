//! Input payloads for the registration workflow.
//!
//! Plain data: nothing here is validated until a service builds entities
//! from it.

use serde::{Deserialize, Serialize};

use crate::domain::UserProfile;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressDetails {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRegistration {
    pub user_name: String,
    pub email: String,
    pub profile: Option<UserProfile>,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelterRegistration {
    pub shelter_name: String,
    pub address: Option<AddressDetails>,
    pub responsible_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationDetails {
    pub description: String,
    pub amount: Option<i32>,
}

/// A batch of donations delivered to the shelter run by `responsible_email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationReceipt {
    pub responsible_email: String,
    pub donations: Option<Vec<DonationDetails>>,
}
