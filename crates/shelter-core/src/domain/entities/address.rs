//! The postal `Address` of a shelter.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use serde::Serialize;

use crate::domain::{error::DomainError, identifier, validation::require_non_blank};

pub const STREET_NAME_ERROR: &str = "Please make sure the street name was entered correctly.";
pub const RESIDENCE_NUMBER_ERROR: &str =
    "Please make sure the residence number was entered correctly.";
pub const NEIGHBORHOOD_NAME_ERROR: &str =
    "Please make sure the neighborhood name was entered correctly.";
pub const CITY_NAME_ERROR: &str = "Please make sure the city name was entered correctly.";
pub const STATE_NAME_ERROR: &str = "Please make sure the state name was entered correctly.";
pub const ZIP_ERROR: &str = "Please make sure the postal code was entered correctly.";
pub const INVALID_ID_ERROR: &str = "A valid ID must be provided";

/// A validated postal address.
///
/// Immutable once built. Fields are checked in declaration order with the id
/// first, so the reported failure is always the first field that is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    id: String,
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    zip: String,
}

impl Address {
    pub fn new(
        id: impl Into<String>,
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            id: id.into(),
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), DomainError> {
        identifier::is_valid(&self.id)
            .map_err(|cause| DomainError::address(INVALID_ID_ERROR).caused_by(cause))?;

        for (value, message) in [
            (&self.street, STREET_NAME_ERROR),
            (&self.number, RESIDENCE_NUMBER_ERROR),
            (&self.neighborhood, NEIGHBORHOOD_NAME_ERROR),
            (&self.city, CITY_NAME_ERROR),
            (&self.state, STATE_NAME_ERROR),
            (&self.zip, ZIP_ERROR),
        ] {
            require_non_blank(value, message, DomainError::address)?;
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn street(&self) -> &str {
        &self.street
    }
    pub fn number(&self) -> &str {
        &self.number
    }
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }
    pub fn city(&self) -> &str {
        &self.city
    }
    pub fn state(&self) -> &str {
        &self.state
    }
    pub fn zip(&self) -> &str {
        &self.zip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdentifierError;

    const ID: &str = "9b2f3d1e-6c1a-4f7e-8a55-2f1c0f8e4b11";

    fn build(fields: [&str; 7]) -> Result<Address, DomainError> {
        let [id, street, number, neighborhood, city, state, zip] = fields;
        Address::new(id, street, number, neighborhood, city, state, zip)
    }

    #[test]
    fn valid_address_keeps_fields() {
        let address = build([ID, "Main St", "1", "Centro", "Town", "ST", "00000"]).unwrap();
        assert_eq!(address.id(), ID);
        assert_eq!(address.street(), "Main St");
        assert_eq!(address.zip(), "00000");
    }

    #[test]
    fn id_is_checked_before_street() {
        let err = build(["", "", "1", "Centro", "Town", "ST", "00000"]).unwrap_err();
        assert_eq!(err.reason(), INVALID_ID_ERROR);
        assert_eq!(err.identifier_cause(), Some(&IdentifierError::Missing));
    }

    #[test]
    fn malformed_id_keeps_identifier_cause() {
        let err = build(["42", "Main St", "1", "Centro", "Town", "ST", "00000"]).unwrap_err();
        assert!(matches!(
            err.identifier_cause(),
            Some(IdentifierError::Malformed { .. })
        ));
    }

    #[test]
    fn each_blank_field_reports_its_own_message() {
        let cases = [
            (1, STREET_NAME_ERROR),
            (2, RESIDENCE_NUMBER_ERROR),
            (3, NEIGHBORHOOD_NAME_ERROR),
            (4, CITY_NAME_ERROR),
            (5, STATE_NAME_ERROR),
            (6, ZIP_ERROR),
        ];
        for (index, expected) in cases {
            let mut fields = [ID, "Main St", "1", "Centro", "Town", "ST", "00000"];
            fields[index] = "  ";
            let err = build(fields).unwrap_err();
            assert_eq!(err, DomainError::address(expected));
        }
    }

    #[test]
    fn first_failing_field_wins() {
        let err = build([ID, "Main St", "", "", "", "", ""]).unwrap_err();
        assert_eq!(err.reason(), RESIDENCE_NUMBER_ERROR);
    }
}
