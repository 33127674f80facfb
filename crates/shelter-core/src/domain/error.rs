// ============================================================================
// domain/error.rs - DOMAIN FAILURES
// ============================================================================

use thiserror::Error;

/// Failures raised while building or mutating a domain entity.
///
/// Every variant names the entity that failed and carries the human-readable
/// reason. When the failure came from identifier validation, the
/// [`IdentifierError`] is kept as the source so callers can walk the chain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("An error occurred while trying to create an address: {reason}")]
    AddressCreation {
        reason: String,
        #[source]
        source: Option<IdentifierError>,
    },

    #[error("An error occurred while trying to register a donation: {reason}")]
    DonationRegistration {
        reason: String,
        #[source]
        source: Option<IdentifierError>,
    },

    #[error("An error occurred while trying to create a user: {reason}")]
    UserCreation {
        reason: String,
        #[source]
        source: Option<IdentifierError>,
    },

    #[error("An error occurred while trying to create a shelter: {reason}")]
    ShelterCreation {
        reason: String,
        #[source]
        source: Option<IdentifierError>,
    },
}

impl DomainError {
    pub fn address(reason: impl Into<String>) -> Self {
        Self::AddressCreation {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn donation(reason: impl Into<String>) -> Self {
        Self::DonationRegistration {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn user(reason: impl Into<String>) -> Self {
        Self::UserCreation {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn shelter(reason: impl Into<String>) -> Self {
        Self::ShelterCreation {
            reason: reason.into(),
            source: None,
        }
    }

    /// Attach the identifier failure that triggered this error.
    pub fn caused_by(mut self, cause: IdentifierError) -> Self {
        match &mut self {
            Self::AddressCreation { source, .. }
            | Self::DonationRegistration { source, .. }
            | Self::UserCreation { source, .. }
            | Self::ShelterCreation { source, .. } => *source = Some(cause),
        }
        self
    }

    /// The reason text without the entity prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::AddressCreation { reason, .. }
            | Self::DonationRegistration { reason, .. }
            | Self::UserCreation { reason, .. }
            | Self::ShelterCreation { reason, .. } => reason,
        }
    }

    /// The identifier failure behind this error, if any.
    pub fn identifier_cause(&self) -> Option<&IdentifierError> {
        match self {
            Self::AddressCreation { source, .. }
            | Self::DonationRegistration { source, .. }
            | Self::UserCreation { source, .. }
            | Self::ShelterCreation { source, .. } => source.as_ref(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        let mut hints = vec![self.reason().to_string()];
        if self.identifier_cause().is_some() {
            hints.push("Identifiers must be canonical hyphenated UUIDs".into());
        }
        hints
    }
}

/// Failures of the identifier utility.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("UUID must be provided")]
    Missing,

    #[error("The ID {value} must be in UUID format")]
    Malformed { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity() {
        let err = DomainError::address("street missing");
        assert_eq!(
            err.to_string(),
            "An error occurred while trying to create an address: street missing"
        );
        assert_eq!(err.reason(), "street missing");
    }

    #[test]
    fn identifier_cause_is_kept_as_source() {
        use std::error::Error as _;

        let err = DomainError::user("bad id").caused_by(IdentifierError::Missing);
        assert_eq!(err.identifier_cause(), Some(&IdentifierError::Missing));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("UUID must be provided".to_string())
        );
    }

    #[test]
    fn malformed_identifier_message_includes_value() {
        let err = IdentifierError::Malformed {
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "The ID abc must be in UUID format");
    }
}
