//! Offline postal-code lookup.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use shelter_core::{
    application::{AddressLookup, AddressLookupResult, ApplicationError},
    error::{RegistryError, RegistryResult},
};

/// Cause attached to a failed lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No address is registered for postal code '{0}'")]
pub struct UnknownPostalCode(pub String);

/// A postal-code table file. JSON files hold a bare array of entries; TOML
/// files hold an `[[entries]]` array.
#[derive(Debug, Default, Deserialize)]
struct PostalCodeTable {
    #[serde(default)]
    entries: Vec<AddressLookupResult>,
}

/// [`AddressLookup`] over a fixed table of postal codes.
///
/// Codes are compared on their letters and digits only, so `01001-000` and
/// `01001000` are the same code.
#[derive(Debug, Clone, Default)]
pub struct StaticAddressLookup {
    entries: BTreeMap<String, AddressLookupResult>,
}

fn normalize(zip: &str) -> String {
    zip.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl StaticAddressLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: AddressLookupResult) -> Self {
        self.insert(entry);
        self
    }

    pub fn insert(&mut self, entry: AddressLookupResult) {
        self.entries.insert(normalize(&entry.zip), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a table from a `.json` or `.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| table_error(path, e))?;

        let table: PostalCodeTable = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| table_error(path, e))?,
            _ => PostalCodeTable {
                entries: serde_json::from_str(&content).map_err(|e| table_error(path, e))?,
            },
        };

        let lookup = table
            .entries
            .into_iter()
            .fold(Self::new(), |lookup, entry| lookup.with_entry(entry));
        debug!(path = %path.display(), entries = lookup.len(), "Postal-code table loaded");
        Ok(lookup)
    }
}

fn table_error(path: &Path, e: impl std::fmt::Display) -> RegistryError {
    RegistryError::Configuration {
        message: format!("Failed to load postal-code table {}: {}", path.display(), e),
    }
}

impl AddressLookup for StaticAddressLookup {
    fn lookup(&self, zip: &str) -> RegistryResult<AddressLookupResult> {
        match self.entries.get(&normalize(zip)) {
            Some(found) => Ok(found.clone()),
            None => {
                warn!(zip, "Postal code lookup failed");
                Err(ApplicationError::external_lookup(zip, UnknownPostalCode(zip.to_string())).into())
            }
        }
    }
}
