pub mod address;
pub mod donation;
pub mod shelter;
pub mod user;

pub use address::Address;
pub use donation::{DEFAULT_DONATION_AMOUNT, Donation};
pub use shelter::Shelter;
pub use user::User;
