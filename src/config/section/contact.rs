//! `[contact]` section configuration.
//!
//! Settings for the reservation message and WhatsApp links.
//!
//! # Example
//!
//! ```toml
//! [contact]
//! dealer = "MotorPride"   # Greeting in the reservation message
//! country_code = "254"    # Replaces a leading 0 in local phone numbers
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Dealership name used in the reservation message.
    pub dealer: String,

    /// International dialing code without `+`.
    pub country_code: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            dealer: "MotorPride".into(),
            country_code: "254".into(),
        }
    }
}

impl ContactConfig {
    const COUNTRY_CODE: FieldPath = FieldPath::new("contact.country_code");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.country_code.is_empty() || !self.country_code.bytes().all(|b| b.is_ascii_digit()) {
            diag.error_with_hint(
                Self::COUNTRY_CODE,
                format!("`{}` must contain only digits", self.country_code),
                "write the dialing code without `+`, e.g. `254`",
            );
        }
    }
}
