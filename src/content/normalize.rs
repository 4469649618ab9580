//! Field normalization: raw frontmatter maps to fixed-shape records.
//!
//! Nothing here fails. Malformed values fall back to the defaults below.

use crate::config::CarsConfig;
use crate::debug;

use super::images::resolve_images;
use super::{CarRecord, CarStatus, ContactRecord, Document, JsonMap, RawField};

pub const DEFAULT_TITLE: &str = "Untitled Vehicle";
pub const DEFAULT_BRAND: &str = "Unknown";
pub const DEFAULT_MODEL: &str = "Not specified";
pub const DEFAULT_PRICE: &str = "Contact for price";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

pub const DEFAULT_CONTACT_NAME: &str = "Sales Team";
pub const DEFAULT_CONTACT_ROLE: &str = "Sales Agent";

/// Frontmatter keys that map onto fixed [`CarRecord`] fields.
const CAR_FIELDS: &[&str] = &[
    "slug",
    "title",
    "brand",
    "model",
    "year",
    "price",
    "status",
    "featured",
    "description",
    "features",
    "images",
    "image",
    "primary_image",
    "car_id",
    "contact_ref",
];

/// Frontmatter keys that map onto fixed [`ContactRecord`] fields.
const CONTACT_FIELDS: &[&str] = &[
    "slug", "name", "phone", "whatsapp", "email", "role", "featured",
];

/// Build a [`CarRecord`] from a parsed document.
pub fn normalize_car(doc: &Document, config: &CarsConfig) -> CarRecord {
    let fields = &doc.fields;
    let text = |key: &str| RawField::field(fields, key).text().map(str::to_string);

    let raw_brand = text("brand");
    let raw_model = text("model");
    let title = text("title")
        .or_else(|| compose_title(raw_brand.as_deref(), raw_model.as_deref()))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let year = RawField::field(fields, "year")
        .integer()
        .unwrap_or(config.default_year);

    let status = match text("status") {
        Some(raw) => {
            let status = CarStatus::parse(&raw);
            if !status.is_known() {
                debug!("normalize"; "{}: unknown status '{}' kept as-is", doc.slug, status);
            }
            status
        }
        None => CarStatus::default(),
    };

    let description = text("description")
        .or_else(|| Some(doc.body.trim()).filter(|b| !b.is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let mut raw_images = RawField::field(fields, "images").into_list();
    raw_images.extend(RawField::field(fields, "image").into_list());
    let images = resolve_images(RawField::List(raw_images), &config.placeholder);
    let primary_image = images[0].clone();

    CarRecord {
        slug: doc.slug.clone(),
        car_id: text("car_id").unwrap_or_else(|| doc.slug.clone()),
        title,
        brand: raw_brand.unwrap_or_else(|| DEFAULT_BRAND.to_string()),
        model: raw_model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        year,
        price: format_price(&RawField::field(fields, "price"), &config.currency),
        status,
        featured: RawField::field(fields, "featured").flag(),
        description,
        features: normalize_features(RawField::field(fields, "features")),
        images,
        primary_image,
        contact_ref: text("contact_ref").unwrap_or_default(),
        extra: passthrough(fields, CAR_FIELDS),
    }
}

/// Build a [`ContactRecord`] from a parsed document.
pub fn normalize_contact(doc: &Document) -> ContactRecord {
    let fields = &doc.fields;
    let text = |key: &str| RawField::field(fields, key).text().map(str::to_string);

    let phone = text("phone").unwrap_or_default();
    ContactRecord {
        slug: doc.slug.clone(),
        name: text("name").unwrap_or_else(|| DEFAULT_CONTACT_NAME.to_string()),
        whatsapp: text("whatsapp").unwrap_or_else(|| phone.clone()),
        phone,
        email: text("email").unwrap_or_default(),
        role: text("role").unwrap_or_else(|| DEFAULT_CONTACT_ROLE.to_string()),
        featured: RawField::field(fields, "featured").flag(),
        extra: passthrough(fields, CONTACT_FIELDS),
    }
}

/// `"{brand} {model}"` from whichever parts exist.
fn compose_title(brand: Option<&str>, model: Option<&str>) -> Option<String> {
    match (brand, model) {
        (Some(b), Some(m)) => Some(format!("{b} {m}")),
        (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
        (None, None) => None,
    }
}

/// Feature list from a list or a comma separated string.
pub fn normalize_features(raw: RawField) -> Vec<String> {
    match raw {
        RawField::Scalar(s) => split_commas(&s),
        other => other
            .into_list()
            .into_iter()
            .filter_map(|item| match item {
                RawField::Scalar(s) => Some(s.trim().to_string()),
                // CMS list widget stores `{feature: "..."}`
                RawField::Object(map) => {
                    RawField::field(&map, "feature").text().map(str::to_string)
                }
                RawField::ImageRef { .. } | RawField::List(_) | RawField::Absent => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
    }
}

fn split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Display price: text is kept, bare numbers get the currency prefix and
/// thousands separators.
pub fn format_price(raw: &RawField, currency: &str) -> String {
    let Some(text) = raw.text() else {
        return DEFAULT_PRICE.to_string();
    };

    match text.split_once('.') {
        _ if !text.bytes().any(|b| b.is_ascii_digit()) => text.to_string(),
        Some((whole, frac)) if is_digits(whole) && is_digits(frac) => {
            if frac.bytes().all(|b| b == b'0') {
                format!("{currency} {}", group_thousands(whole))
            } else {
                format!("{currency} {}.{frac}", group_thousands(whole))
            }
        }
        None if is_digits(text) => format!("{currency} {}", group_thousands(text)),
        _ => text.to_string(),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `2500000` -> `2,500,000`
fn group_thousands(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Copy every key not in `known`, preserving frontmatter order.
fn passthrough(fields: &JsonMap, known: &[&str]) -> JsonMap {
    fields
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
