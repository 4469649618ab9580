//! `[paths]` section configuration.
//!
//! All paths are relative to the project root (the directory holding
//! `showroom.toml`, or `--root`).
//!
//! # Example
//!
//! ```toml
//! [paths]
//! cars = "content/cars"          # Markdown files written by the CMS
//! contacts = "content/contacts"  # Sales contact Markdown files
//! data = "data"                  # Output directory for the JSON indexes
//! images = "static/images"       # CMS media folder, served as /images
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

/// File name of the generated cars index inside `data`.
pub const CARS_INDEX: &str = "cars-index.json";
/// File name of the generated contacts index inside `data`.
pub const CONTACTS_INDEX: &str = "contacts-index.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Car Markdown directory.
    pub cars: PathBuf,
    /// Contact Markdown directory.
    pub contacts: PathBuf,
    /// Index output directory.
    pub data: PathBuf,
    /// Static image directory.
    pub images: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cars: "content/cars".into(),
            contacts: "content/contacts".into(),
            data: "data".into(),
            images: "static/images".into(),
        }
    }
}

impl PathsConfig {
    const CARS: FieldPath = FieldPath::new("paths.cars");
    const CONTACTS: FieldPath = FieldPath::new("paths.contacts");
    const DATA: FieldPath = FieldPath::new("paths.data");
    const IMAGES: FieldPath = FieldPath::new("paths.images");

    /// Path of the cars index file.
    pub fn cars_index(&self) -> PathBuf {
        self.data.join(CARS_INDEX)
    }

    /// Path of the contacts index file.
    pub fn contacts_index(&self) -> PathBuf {
        self.data.join(CONTACTS_INDEX)
    }

    /// Directories the build makes sure exist before writing.
    pub fn build_dirs(&self) -> [&Path; 4] {
        [
            self.cars.as_path(),
            self.contacts.as_path(),
            self.data.as_path(),
            self.images.as_path(),
        ]
    }

    /// Resolve every path against the project root.
    pub fn normalize(&mut self, root: &Path) {
        for path in [
            &mut self.cars,
            &mut self.contacts,
            &mut self.data,
            &mut self.images,
        ] {
            *path = root.join(&*path);
        }
    }

    /// Configured paths must stay inside the project.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            (Self::CARS, &self.cars),
            (Self::CONTACTS, &self.contacts),
            (Self::DATA, &self.data),
            (Self::IMAGES, &self.images),
        ] {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("`{}` must be relative to the project root", path.display()),
                    "use --root to point at another project",
                );
            } else if path.as_os_str().is_empty() {
                diag.error(field, "must not be empty");
            }
        }
    }
}
