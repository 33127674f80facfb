//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core and adapter crates never see it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `SHELTER_`-prefixed environment variables, `__` between key parts
//!    (`SHELTER_STORAGE__BACKEND=memory`)
//! 2. Config file (`--config`, otherwise the platform config dir)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Where the JSON backend keeps its tables.
    pub data_dir: PathBuf,
}

/// Which record store the repositories run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local; everything is gone when the command exits.
    Memory,
    Json,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// JSON or TOML postal-code table for `address lookup`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_codes: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackend::Json,
                data_dir: Self::default_data_dir(),
            },
            lookup: LookupConfig::default(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// A file passed explicitly with `--config` must exist when
    /// `must_exist` is set; the default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), must_exist),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = toml::to_string(&Self::default()).context("Failed to encode defaults")?;

        Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("SHELTER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.shelter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "shelter", "shelter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".shelter.toml"))
    }

    fn default_data_dir() -> PathBuf {
        directories::ProjectDirs::from("org", "shelter", "shelter")
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".shelter-data"))
    }

    /// The value behind a dotted key, as shown by `config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage.backend" => Some(self.storage.backend.to_string()),
            "storage.data_dir" => Some(self.storage.data_dir.display().to_string()),
            "lookup.postal_codes" => Some(
                self.lookup
                    .postal_codes
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }
}
