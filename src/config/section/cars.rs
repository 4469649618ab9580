//! `[cars]` section configuration.
//!
//! Defaults applied while normalizing car frontmatter.
//!
//! # Example
//!
//! ```toml
//! [cars]
//! default_year = 2023                        # Used when `year` is missing or not a number
//! currency = "KSh"                           # Prefix for numeric prices
//! placeholder = "/images/car-placeholder.jpg"  # Image used when a car has none
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::content::images::IMAGE_BASE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarsConfig {
    /// Year used when the frontmatter has none.
    pub default_year: i64,

    /// Currency prefix for numeric prices.
    pub currency: String,

    /// Fallback image path.
    pub placeholder: String,
}

impl Default for CarsConfig {
    fn default() -> Self {
        Self {
            default_year: 2023,
            currency: "KSh".into(),
            placeholder: "/images/car-placeholder.jpg".into(),
        }
    }
}

impl CarsConfig {
    const CURRENCY: FieldPath = FieldPath::new("cars.currency");
    const PLACEHOLDER: FieldPath = FieldPath::new("cars.placeholder");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.currency.trim().is_empty() {
            diag.error(Self::CURRENCY, "must not be empty");
        }
        if !self.placeholder.starts_with(IMAGE_BASE) || self.placeholder.len() == IMAGE_BASE.len()
        {
            diag.error_with_hint(
                Self::PLACEHOLDER,
                format!("`{}` is not an image path", self.placeholder),
                format!("placeholder must start with `{IMAGE_BASE}`"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_cars_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.cars.default_year, 2023);
        assert_eq!(config.cars.currency, "KSh");
        assert_eq!(config.cars.placeholder, "/images/car-placeholder.jpg");
    }

    #[test]
    fn test_cars_config_override() {
        let config = test_parse_config("[cars]\ndefault_year = 2025\ncurrency = \"USD\"");
        assert_eq!(config.cars.default_year, 2025);
        assert_eq!(config.cars.currency, "USD");
    }

    #[test]
    fn test_cars_config_placeholder_outside_images() {
        let config = test_parse_config("[cars]\nplaceholder = \"/img/none.jpg\"\ncurrency = \" \"");
        let mut diag = ConfigDiagnostics::new();
        config.cars.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["cars.currency", "cars.placeholder"]);
    }
}
