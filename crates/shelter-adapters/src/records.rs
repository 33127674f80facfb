//! Persistence records.
//!
//! Flat, fully-defaultable mirrors of the domain entities. A record is what
//! storage reads and writes; it carries no validation. Turning a record back
//! into an entity always goes through the entity's constructor (see
//! `crate::mapping`).

use serde::{Deserialize, Serialize};

/// Persistence-side copy of the user profile.
///
/// Kept separate from `shelter_core::domain::UserProfile`; the two are
/// related only through their upper-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileType {
    Donor,
    Beneficiary,
}

impl ProfileType {
    pub const ALL: [ProfileType; 2] = [Self::Donor, Self::Beneficiary];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Donor => "DONOR",
            Self::Beneficiary => "BENEFICIARY",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|profile| profile.name() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub id: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationRecord {
    pub id: String,
    pub description: String,
    pub amount: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub user_profile: Option<ProfileType>,
    pub user_password: String,
}

/// A shelter row. The address and responsible user live in their own tables
/// and are referenced by id; the donations belong to the shelter.
///
/// `donations` distinguishes an absent collection from an empty one; both
/// read back as a shelter without donations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelterRecord {
    pub id: String,
    pub shelter_name: String,
    pub address_id: String,
    pub responsible_user_id: String,
    pub donations: Option<Vec<DonationRecord>>,
}

/// A shelter row joined with the rows it references. `None` marks a
/// reference that did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelterRow {
    pub shelter: ShelterRecord,
    pub address: Option<AddressRecord>,
    pub responsible_user: Option<UserRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_build_from_an_empty_document() {
        let record: ShelterRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ShelterRecord::default());
        assert!(record.donations.is_none());
    }

    #[test]
    fn profile_names_match_serialized_form() {
        for profile in ProfileType::ALL {
            let json = serde_json::to_string(&profile).unwrap();
            assert_eq!(json, format!("\"{}\"", profile.name()));
        }
        assert_eq!(ProfileType::from_name("ADMIN"), None);
    }
}
