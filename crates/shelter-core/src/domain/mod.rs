//! Core domain layer of the shelter registry.
//!
//! Entities validate themselves on construction and on every mutation, so a
//! value of any entity type is always consistent.
//!
//! - **No I/O**: persistence and lookups live behind application ports
//! - **No tracing**: observability belongs to the application and adapters
//! - **Serialize only**: entities are never deserialized; rebuilding one from
//!   stored data always goes through its validating constructor
pub mod entities;
pub mod error;
pub mod factories;
pub mod identifier;
pub mod validation;
pub mod value_objects;

pub use entities::{Address, DEFAULT_DONATION_AMOUNT, Donation, Shelter, User};
pub use error::{DomainError, IdentifierError};
pub use value_objects::UserProfile;
