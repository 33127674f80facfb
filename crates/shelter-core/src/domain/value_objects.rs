//! Value types without identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a user plays in the registry.
///
/// Serializes by its upper-case name (`DONOR`, `BENEFICIARY`); displays with
/// the human-readable label used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserProfile {
    Donor,
    Beneficiary,
}

impl UserProfile {
    pub const ALL: [UserProfile; 2] = [Self::Donor, Self::Beneficiary];

    /// Stable upper-case name, used when translating to other profile enums.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Donor => "DONOR",
            Self::Beneficiary => "BENEFICIARY",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Donor => "Donor",
            Self::Beneficiary => "Beneficiary",
        }
    }

    /// Exact lookup by [`UserProfile::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|profile| profile.name() == name)
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
