//! Normalized records written to the JSON indexes.
//!
//! Every fixed field always carries a concrete value, so the frontend never
//! has to default anything. Unrecognized frontmatter keys ride along in
//! `extra` and are flattened after the fixed fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::JsonMap;

/// Sale status of a car.
///
/// Unknown values are kept verbatim in [`CarStatus::Other`] instead of being
/// rejected or coerced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CarStatus {
    #[default]
    Available,
    Sold,
    Incoming,
    Other(String),
}

impl CarStatus {
    /// Parse a raw CMS value, matching known statuses case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "available" => Self::Available,
            "sold" => Self::Sold,
            "incoming" => Self::Incoming,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Incoming => "incoming",
            Self::Other(raw) => raw,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CarStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CarStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// One car in `cars-index.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    pub slug: String,
    #[serde(default)]
    pub car_id: String,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub price: String,
    pub status: CarStatus,
    pub featured: bool,
    pub description: String,
    pub features: Vec<String>,
    /// Resolved image paths, never empty.
    pub images: Vec<String>,
    pub primary_image: String,
    #[serde(default)]
    pub contact_ref: String,
    /// Unrecognized frontmatter keys, passed through untouched.
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// One sales contact in `contacts-index.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl ContactRecord {
    /// Contact with only the fields the built-in fallback list carries.
    pub fn builtin(name: &str, whatsapp: &str, role: &str) -> Self {
        Self {
            slug: String::new(),
            name: name.to_string(),
            phone: whatsapp.to_string(),
            whatsapp: whatsapp.to_string(),
            email: String::new(),
            role: role.to_string(),
            featured: false,
            extra: JsonMap::new(),
        }
    }
}
