//! Project configuration management for `showroom.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── cars       # [cars]
//! │   ├── contact    # [contact]
//! │   └── paths      # [paths]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ShowroomConfig (this file)
//! ```
//!
//! The config file is optional: a project without `showroom.toml` builds
//! with the defaults of every section.

pub mod section;
pub mod types;

pub use section::{CARS_INDEX, CONTACTS_INDEX, CarsConfig, ContactConfig, PathsConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log, utils::path::normalize_path};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing showroom.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowroomConfig {
    /// Absolute path to the config file, which may not exist (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Content, data and image directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// Car normalization defaults
    #[serde(default)]
    pub cars: CarsConfig,

    /// Reservation settings
    #[serde(default)]
    pub contact: ContactConfig,
}

impl ShowroomConfig {
    /// Load configuration from CLI arguments.
    ///
    /// The project root is `--root`; the config file is resolved against it
    /// unless `--config` is absolute.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = normalize_path(&cli.root);
        let config_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            root.join(&cli.config)
        };

        let config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            crate::debug!("config"; "{} not found, using defaults", config_path.display());
            Self::default()
        };

        config.finalize(&root, config_path)
    }

    /// Validate raw values, then resolve paths against `root`.
    pub fn finalize(mut self, root: &Path, config_path: PathBuf) -> Result<Self> {
        // Must run before normalization turns every path absolute
        self.validate()?;

        self.root = root.to_path_buf();
        self.config_path = config_path;
        self.paths.normalize(root);
        Ok(self)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());

        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate every section, collecting all errors before failing.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.paths.validate(&mut diag);
        self.cars.validate(&mut diag);
        self.contact.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Validation(e).into())
    }

    /// Get path relative to the project root, for display
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }
}

/// Parse a config snippet, panicking on invalid TOML.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ShowroomConfig {
    ShowroomConfig::from_str(content).expect("valid test config")
}

// ============================================================================
// tests
// ============================================================================
