//! Command handlers.
//!
//! Each handler translates parsed arguments into service calls and renders
//! the result through the [`OutputManager`](crate::output::OutputManager).
//! Business rules stay in `shelter-core`.

pub mod address;
pub mod completions;
pub mod config;
pub mod init;
pub mod shelter;
pub mod user;
