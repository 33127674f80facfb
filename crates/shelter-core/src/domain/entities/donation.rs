//! A `Donation` received by a shelter.

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    identifier,
    validation::{require_non_blank, require_present},
};

pub const INVALID_DESCRIPTION_ERROR: &str = "The donation description is empty or null";
pub const INVALID_AMOUNT_ERROR: &str = "The amount must be greater than zero";
pub const INVALID_ID_ERROR: &str = "A valid ID must be provided";

/// Amounts below this are raised to it.
pub const DEFAULT_DONATION_AMOUNT: i32 = 1;

/// A described quantity of goods. Immutable.
///
/// The amount is never below [`DEFAULT_DONATION_AMOUNT`]: zero or negative
/// amounts are floored on construction, only an absent amount is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Donation {
    id: String,
    description: String,
    amount: i32,
}

impl Donation {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: Option<i32>,
    ) -> Result<Self, DomainError> {
        let amount = require_present(amount, INVALID_AMOUNT_ERROR, DomainError::donation)?
            .max(DEFAULT_DONATION_AMOUNT);

        let donation = Self {
            id: id.into(),
            description: description.into(),
            amount,
        };

        identifier::is_valid(&donation.id)
            .map_err(|cause| DomainError::donation(INVALID_ID_ERROR).caused_by(cause))?;
        require_non_blank(
            &donation.description,
            INVALID_DESCRIPTION_ERROR,
            DomainError::donation,
        )?;

        Ok(donation)
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub const fn amount(&self) -> i32 {
        self.amount
    }
}
