//! Unified error handling for the shelter registry core.
//!
//! `RegistryError` wraps domain, identifier, validation and application
//! errors so every port and service shares one result type.

use thiserror::Error;

use crate::application::{ApplicationError, FailureDetail};
use crate::domain::{DomainError, IdentifierError};

/// Root error type for registry operations.
#[derive(Debug, Error, Clone)]
pub enum RegistryError {
    /// Business rule violations raised by entity constructors and mutators.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// Mapping, persistence and orchestration failures.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl RegistryError {
    /// This error followed by every wrapped registry error, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &RegistryError> {
        std::iter::successors(Some(self), |current| match current {
            Self::Application(inner) => inner.cause(),
            _ => None,
        })
    }

    /// The innermost registry error in the chain.
    pub fn root_cause(&self) -> &RegistryError {
        self.chain().last().unwrap_or(self)
    }

    /// The first domain rule violation in the chain, if any.
    pub fn domain_cause(&self) -> Option<&DomainError> {
        self.chain().find_map(|error| match error {
            Self::Domain(domain) => Some(domain),
            _ => None,
        })
    }

    /// The outermost failure term in the chain, if any.
    pub fn detail(&self) -> Option<FailureDetail> {
        self.chain().find_map(|error| match error {
            Self::Application(app) => app.detail(),
            _ => None,
        })
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Identifier(_) => vec![
                "Identifiers look like 67e55044-10b1-426f-9247-bb680e5fe0c8".into(),
                "Use the id printed when the record was created".into(),
            ],
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in the shelter registry".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) | Self::Identifier(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::Application(ApplicationError::StoreLockError { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    External,
    Storage,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> RegistryError {
        let address = ApplicationError::address_record_term(
            FailureDetail::ClassMappingFailure,
            "AddressRecord",
        )
        .with_source(DomainError::address("street"));
        ApplicationError::shelter_record_term(FailureDetail::ClassMappingFailure, "ShelterRecord")
            .with_source(address)
            .into()
    }

    #[test]
    fn chain_walks_to_the_domain_violation() {
        let err = nested();
        assert_eq!(err.chain().count(), 3);
        assert_eq!(err.domain_cause(), Some(&DomainError::address("street")));
        assert!(matches!(err.root_cause(), RegistryError::Domain(_)));
    }

    #[test]
    fn detail_is_taken_from_outermost_failure() {
        let err = nested();
        assert_eq!(err.detail(), Some(FailureDetail::ClassMappingFailure));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn lock_errors_are_retryable() {
        let err: RegistryError = ApplicationError::StoreLockError { table: "users" }.into();
        assert!(err.is_retryable());
        assert!(!nested().is_retryable());
    }
}
