//! Creation with a freshly generated identifier.
//!
//! Each `create` assigns a new random UUID and defers to the validating
//! constructor, so a failure here is exactly the constructor's failure.

use crate::domain::{
    entities::{Address, Donation, Shelter, User},
    error::DomainError,
    identifier,
    value_objects::UserProfile,
};

impl Address {
    pub fn create(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(identifier::generate(), street, number, neighborhood, city, state, zip)
    }
}

impl Donation {
    pub fn create(
        description: impl Into<String>,
        amount: Option<i32>,
    ) -> Result<Self, DomainError> {
        Self::new(identifier::generate(), description, amount)
    }
}

impl User {
    pub fn create(
        user_name: impl Into<String>,
        email: impl Into<String>,
        profile: Option<UserProfile>,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(identifier::generate(), user_name, email, profile, password)
    }
}

impl Shelter {
    pub fn create(
        shelter_name: impl Into<String>,
        address: Option<Address>,
        responsible_user: Option<User>,
    ) -> Result<Self, DomainError> {
        Self::new(identifier::generate(), shelter_name, address, responsible_user)
    }
}
