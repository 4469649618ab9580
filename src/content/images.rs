//! Image path resolution.
//!
//! Turns whatever the CMS wrote for `images`/`image` into an ordered,
//! de-duplicated list of site paths under [`IMAGE_BASE`]. Stages run in a
//! fixed order: unwrap objects, normalize prefixes, drop blanks and
//! duplicates, then fall back to the placeholder.

use std::collections::HashSet;

use super::RawField;

/// Public URL prefix of every resolved image.
pub const IMAGE_BASE: &str = "/images/";

/// Media folder the CMS uploads into; served as [`IMAGE_BASE`].
const MEDIA_FOLDER: &str = "static/images/";

/// Resolve raw image values to site paths, never returning an empty list.
pub fn resolve_images(raw: RawField, placeholder: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut images: Vec<String> = raw
        .into_list()
        .into_iter()
        .filter_map(unwrap_image)
        .map(|path| normalize_image_path(&path))
        .filter(|path| !path.is_empty())
        .filter(|path| seen.insert(path.clone()))
        .collect();

    if images.is_empty() {
        images.push(placeholder.to_string());
    }
    images
}

/// Extract the path of one list element, dropping anything without one.
fn unwrap_image(item: RawField) -> Option<String> {
    match item {
        RawField::Scalar(path) | RawField::ImageRef { image: path } => Some(path),
        RawField::Absent | RawField::Object(_) | RawField::List(_) => None,
    }
}

/// Prefix a single path with [`IMAGE_BASE`].
///
/// Blank input yields an empty string, which the caller drops.
pub fn normalize_image_path(raw: &str) -> String {
    let path = raw.trim();
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with(IMAGE_BASE) {
        return path.to_string();
    }

    let relative = path.trim_start_matches('/');
    let relative = relative.strip_prefix(MEDIA_FOLDER).unwrap_or(relative);
    let base_name = &IMAGE_BASE[1..];

    if let Some(rest) = relative.strip_prefix(base_name) {
        format!("{IMAGE_BASE}{rest}")
    } else if relative.is_empty() {
        String::new()
    } else {
        format!("{IMAGE_BASE}{relative}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PLACEHOLDER: &str = "/images/car-placeholder.jpg";

    fn resolve(value: serde_json::Value) -> Vec<String> {
        resolve_images(RawField::from_value(Some(&value)), PLACEHOLDER)
    }

    #[test]
    fn test_mixed_representations_keep_order() {
        let images = resolve(json!([{"image": "foo.jpg"}, "bar.jpg", "/images/baz.jpg"]));
        assert_eq!(
            images,
            vec!["/images/foo.jpg", "/images/bar.jpg", "/images/baz.jpg"]
        );
    }

    #[test]
    fn test_duplicates_across_formats_collapse() {
        let images = resolve(json!([
            "images/a.jpg",
            {"image": "/images/a.jpg"},
            "a.jpg",
            "b.jpg",
            "a.jpg"
        ]));
        assert_eq!(images, vec!["/images/a.jpg", "/images/b.jpg"]);
    }

    #[test]
    fn test_single_values_are_wrapped() {
        assert_eq!(resolve(json!("front.jpg")), vec!["/images/front.jpg"]);
        assert_eq!(
            resolve(json!({"image": "images/side.png"})),
            vec!["/images/side.png"]
        );
    }

    #[test]
    fn test_placeholder_when_nothing_resolves() {
        assert_eq!(
            resolve_images(RawField::Absent, PLACEHOLDER),
            vec![PLACEHOLDER]
        );
        assert_eq!(resolve(json!([])), vec![PLACEHOLDER]);
        assert_eq!(
            resolve(json!(["", "  ", {"caption": "no path"}, null])),
            vec![PLACEHOLDER]
        );
    }

    #[test]
    fn test_normalize_prefix_rules() {
        assert_eq!(normalize_image_path("/images/cars/x.jpg"), "/images/cars/x.jpg");
        assert_eq!(normalize_image_path("images/x.jpg"), "/images/x.jpg");
        assert_eq!(normalize_image_path("x.jpg"), "/images/x.jpg");
        assert_eq!(normalize_image_path("/uploads/x.jpg"), "/images/uploads/x.jpg");
        assert_eq!(normalize_image_path("  cars/x.jpg "), "/images/cars/x.jpg");
    }

    #[test]
    fn test_normalize_strips_media_folder() {
        assert_eq!(normalize_image_path("static/images/x.jpg"), "/images/x.jpg");
        assert_eq!(normalize_image_path("/static/images/x.jpg"), "/images/x.jpg");
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize_image_path(""), "");
        assert_eq!(normalize_image_path("   "), "");
        assert_eq!(normalize_image_path("///"), "");
    }
}
