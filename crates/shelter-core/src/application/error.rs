//! Application layer errors.
//!
//! These errors represent failures in mapping, persistence and orchestration.
//! Business rule violations are `DomainError` from `crate::domain`; when one
//! causes an application failure it is kept as the source, never replaced.

use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

use crate::application::FailureDetail;
use crate::error::{ErrorCategory, RegistryError};

/// Errors that occur during mapping, persistence and service orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The destination type cannot be built from an empty record.
    #[error("{}", FailureDetail::ConstructorDefaultUndefined.render(.type_name))]
    ConstructorUndefined { type_name: String },

    /// Generic mapping could not build the destination.
    #[error("{} {reason}", FailureDetail::ClassMappingFailure.render(.type_name))]
    MappingFailure { type_name: String, reason: String },

    #[error("Address record failure: {message}")]
    AddressRecord {
        message: String,
        detail: Option<FailureDetail>,
        #[source]
        source: Option<Box<RegistryError>>,
    },

    #[error("Donation record failure: {message}")]
    DonationRecord {
        message: String,
        detail: Option<FailureDetail>,
        #[source]
        source: Option<Box<RegistryError>>,
    },

    #[error("User record failure: {message}")]
    UserRecord {
        message: String,
        detail: Option<FailureDetail>,
        #[source]
        source: Option<Box<RegistryError>>,
    },

    #[error("Shelter record failure: {message}")]
    ShelterRecord {
        message: String,
        detail: Option<FailureDetail>,
        #[source]
        source: Option<Box<RegistryError>>,
    },

    #[error("An error occurred in the user service while handling a user. Reason: {message}")]
    UserService {
        message: String,
        detail: Option<FailureDetail>,
        #[source]
        source: Option<Box<RegistryError>>,
    },

    #[error(
        "An error occurred in the shelter service while handling a shelter. Reason: {message}"
    )]
    ShelterService {
        message: String,
        detail: Option<FailureDetail>,
        #[source]
        source: Option<Box<RegistryError>>,
    },

    /// A remote or table-backed address lookup failed.
    #[error("{}", FailureDetail::PostalCodeLookupFailure.render(.zip))]
    ExternalLookup {
        code: u16,
        zip: String,
        #[source]
        cause: Option<Arc<dyn StdError + Send + Sync>>,
    },

    /// Store access failed (lock poisoned).
    #[error("Record store '{table}' is locked")]
    StoreLockError { table: &'static str },

    #[error("Storage error in '{table}': {reason}")]
    Storage {
        table: String,
        reason: String,
        #[source]
        cause: Option<Arc<dyn StdError + Send + Sync>>,
    },
}

macro_rules! tagged_constructors {
    ($($plain:ident, $tagged:ident => $variant:ident;)*) => {
        $(
            pub fn $plain(message: impl Into<String>) -> Self {
                Self::$variant {
                    message: message.into(),
                    detail: None,
                    source: None,
                }
            }

            /// Message rendered from `detail` with `argument` substituted.
            pub fn $tagged(detail: FailureDetail, argument: &str) -> Self {
                Self::$variant {
                    message: detail.render(argument),
                    detail: Some(detail),
                    source: None,
                }
            }
        )*
    };
}

impl ApplicationError {
    tagged_constructors! {
        address_record, address_record_term => AddressRecord;
        donation_record, donation_record_term => DonationRecord;
        user_record, user_record_term => UserRecord;
        shelter_record, shelter_record_term => ShelterRecord;
        user_service, user_service_term => UserService;
        shelter_service, shelter_service_term => ShelterService;
    }

    pub fn external_lookup(
        zip: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::ExternalLookup {
            code: FailureDetail::PostalCodeLookupFailure.term(),
            zip: zip.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// A failed read or write of `table`, keeping the I/O or codec error.
    pub fn storage(
        table: impl Into<String>,
        reason: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            table: table.into(),
            reason: reason.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Attach a lower-level cause. Variants without a cause slot are
    /// returned unchanged.
    pub fn with_source(mut self, cause: impl Into<RegistryError>) -> Self {
        match &mut self {
            Self::AddressRecord { source, .. }
            | Self::DonationRecord { source, .. }
            | Self::UserRecord { source, .. }
            | Self::ShelterRecord { source, .. }
            | Self::UserService { source, .. }
            | Self::ShelterService { source, .. } => *source = Some(Box::new(cause.into())),
            _ => {}
        }
        self
    }

    /// The failure term, when one was assigned.
    pub fn detail(&self) -> Option<FailureDetail> {
        match self {
            Self::ConstructorUndefined { .. } => Some(FailureDetail::ConstructorDefaultUndefined),
            Self::MappingFailure { .. } => Some(FailureDetail::ClassMappingFailure),
            Self::AddressRecord { detail, .. }
            | Self::DonationRecord { detail, .. }
            | Self::UserRecord { detail, .. }
            | Self::ShelterRecord { detail, .. }
            | Self::UserService { detail, .. }
            | Self::ShelterService { detail, .. } => *detail,
            Self::ExternalLookup { code, .. } => Some(FailureDetail::from_term(*code)),
            Self::StoreLockError { .. } | Self::Storage { .. } => None,
        }
    }

    /// The wrapped registry error, if this failure has one.
    pub fn cause(&self) -> Option<&RegistryError> {
        match self {
            Self::AddressRecord { source, .. }
            | Self::DonationRecord { source, .. }
            | Self::UserRecord { source, .. }
            | Self::ShelterRecord { source, .. }
            | Self::UserService { source, .. }
            | Self::ShelterService { source, .. } => source.as_deref(),
            _ => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConstructorUndefined { type_name } => vec![
                format!("{type_name} cannot be built from an empty record"),
                "This is a bug in the record definitions".into(),
            ],
            Self::ExternalLookup { zip, .. } => vec![
                format!("No address is known for postal code '{zip}'"),
                "Check the postal code, or add it to the lookup table".into(),
            ],
            Self::StoreLockError { .. } => vec![
                "The record store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Storage { table, .. } => vec![
                format!("Could not read or write the '{table}' table"),
                "Check that the data directory exists and is writable".into(),
            ],
            _ => match self.cause() {
                Some(cause) => cause.suggestions(),
                None => vec!["Check the error details above".into()],
            },
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConstructorUndefined { .. } => ErrorCategory::Internal,
            Self::MappingFailure { .. } => ErrorCategory::Validation,
            Self::ExternalLookup { .. } => ErrorCategory::External,
            Self::StoreLockError { .. } | Self::Storage { .. } => ErrorCategory::Storage,
            _ => match (self.detail(), self.cause()) {
                (Some(detail), _) => detail.category(),
                (None, Some(cause)) => cause.category(),
                (None, None) => ErrorCategory::Validation,
            },
        }
    }
}
