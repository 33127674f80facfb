//! Infrastructure adapters for the shelter registry.
//!
//! This crate implements the ports defined in `shelter-core::application::ports`:
//! persistence records and their mapping, record stores, repository adapters
//! and the offline postal-code lookup.

pub mod dto;
pub mod lookup;
pub mod mapping;
pub mod records;
pub mod repository;
pub mod storage;

// Re-export commonly used adapters
pub use lookup::StaticAddressLookup;
pub use repository::{
    AddressRepositoryAdapter, DonationRepositoryAdapter, ShelterRepositoryAdapter,
    UserRepositoryAdapter,
};
pub use storage::{InMemoryStore, JsonFileStore, RecordStore};
