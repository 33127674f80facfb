//! Conversion between domain entities, persistence records and DTOs.
//!
//! Two ways in:
//! - [`map_to`]: the generic structural engine, for flat types whose field
//!   names line up.
//! - [`map_with`]: an explicit [`MapperStrategy`], for anything that has to
//!   go through a validating constructor or translate nested values.
//!
//! Record-to-entity conversions always use a strategy, so stored data can
//! never bypass entity validation.

pub mod address;
pub mod donation;
pub mod engine;
pub mod information;
pub mod shelter;
pub mod user;

pub use address::{AddressMapper, AddressRecordMapper};
pub use donation::{DonationMapper, DonationRecordMapper};
pub use engine::{map_to, simple_type_name};
pub use information::ShelterInformationMapper;
pub use shelter::{ShelterMapper, ShelterRecordMapper};
pub use user::{UserMapper, UserRecordMapper};

use shelter_core::error::RegistryResult;

/// One explicit conversion from `S` to `T`.
///
/// The source is optional so a strategy owns the decision of how absence
/// fails; every strategy in this crate rejects it with its type-specific
/// error.
pub trait MapperStrategy<S, T> {
    fn convert(&self, source: Option<&S>) -> RegistryResult<T>;
}

/// Convert through `strategy`. The generic engine is not consulted.
pub fn map_with<S, T>(strategy: &impl MapperStrategy<S, T>, source: Option<&S>) -> RegistryResult<T> {
    strategy.convert(source)
}
