//! Loosely typed CMS values, lifted into one tagged union.
//!
//! The CMS writes the same logical field as a string, a number, an object
//! or a list depending on the widget and on hand edits. Every frontmatter
//! value is converted to [`RawField`] once, and the normalizers branch on
//! it exhaustively.

use serde_json::Value as JsonValue;

use super::JsonMap;

/// A frontmatter value as the normalizers see it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawField {
    /// Missing key or explicit `null`.
    Absent,
    /// String, number or boolean, rendered as text.
    Scalar(String),
    /// An object carrying an `image` path (CMS image widget in a list).
    ImageRef { image: String },
    /// Any other object.
    Object(JsonMap),
    /// A list of values.
    List(Vec<RawField>),
}

impl RawField {
    /// Lift an optional JSON value.
    pub fn from_value(value: Option<&JsonValue>) -> Self {
        match value {
            None | Some(JsonValue::Null) => Self::Absent,
            Some(JsonValue::String(s)) => Self::Scalar(s.clone()),
            Some(JsonValue::Bool(b)) => Self::Scalar(b.to_string()),
            Some(JsonValue::Number(n)) => Self::Scalar(n.to_string()),
            Some(JsonValue::Array(items)) => {
                Self::List(items.iter().map(|v| Self::from_value(Some(v))).collect())
            }
            Some(JsonValue::Object(map)) => match map.get("image") {
                Some(JsonValue::String(s)) => Self::ImageRef { image: s.clone() },
                Some(JsonValue::Number(n)) => Self::ImageRef {
                    image: n.to_string(),
                },
                _ => Self::Object(map.clone()),
            },
        }
    }

    /// Look up `key` in a frontmatter map.
    pub fn field(fields: &JsonMap, key: &str) -> Self {
        Self::from_value(fields.get(key))
    }

    /// Trimmed scalar text, `None` when absent, blank or not a scalar.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s.trim()).filter(|s| !s.is_empty()),
            _ => None,
        }
    }

    /// Wrap single values into a one-element list.
    pub fn into_list(self) -> Vec<RawField> {
        match self {
            Self::Absent => Vec::new(),
            Self::List(items) => items,
            single => vec![single],
        }
    }

    /// `true` only for a real boolean `true` or the string `"true"`.
    pub fn flag(&self) -> bool {
        self.text()
            .is_some_and(|s| s.eq_ignore_ascii_case("true"))
    }

    /// Integer value of a scalar, accepting integral floats like `2021.0`.
    pub fn integer(&self) -> Option<i64> {
        let text = self.text()?;
        if let Ok(n) = text.parse::<i64>() {
            return Some(n);
        }
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lift(value: JsonValue) -> RawField {
        RawField::from_value(Some(&value))
    }

    #[test]
    fn test_lift_variants() {
        assert_eq!(RawField::from_value(None), RawField::Absent);
        assert_eq!(lift(json!(null)), RawField::Absent);
        assert_eq!(lift(json!(2023)), RawField::Scalar("2023".into()));
        assert_eq!(lift(json!(true)), RawField::Scalar("true".into()));
        assert_eq!(
            lift(json!({"image": "a.jpg", "alt": "front"})),
            RawField::ImageRef {
                image: "a.jpg".into()
            }
        );
        assert!(matches!(lift(json!({"caption": "x"})), RawField::Object(_)));
        assert_eq!(
            lift(json!(["a", {"image": "b"}])),
            RawField::List(vec![
                RawField::Scalar("a".into()),
                RawField::ImageRef { image: "b".into() }
            ])
        );
    }

    #[test]
    fn test_into_list_wraps_single_values() {
        assert!(RawField::Absent.into_list().is_empty());
        assert_eq!(
            RawField::Scalar("x".into()).into_list(),
            vec![RawField::Scalar("x".into())]
        );
        assert_eq!(lift(json!(["x", "y"])).into_list().len(), 2);
    }

    #[test]
    fn test_flag() {
        assert!(lift(json!(true)).flag());
        assert!(lift(json!("true")).flag());
        assert!(lift(json!(" TRUE ")).flag());
        assert!(!lift(json!("false")).flag());
        assert!(!lift(json!("yes")).flag());
        assert!(!lift(json!(1)).flag());
        assert!(!RawField::Absent.flag());
    }

    #[test]
    fn test_integer() {
        assert_eq!(lift(json!(2021)).integer(), Some(2021));
        assert_eq!(lift(json!(" 2019 ")).integer(), Some(2019));
        assert_eq!(lift(json!(2020.0)).integer(), Some(2020));
        assert_eq!(lift(json!(2020.5)).integer(), None);
        assert_eq!(lift(json!("twenty")).integer(), None);
        assert_eq!(lift(json!("")).integer(), None);
        assert_eq!(lift(json!([2020])).integer(), None);
    }

    #[test]
    fn test_text_treats_blank_as_missing() {
        assert_eq!(lift(json!("  Toyota ")).text(), Some("Toyota"));
        assert_eq!(lift(json!("   ")).text(), None);
        assert_eq!(lift(json!({"a": 1})).text(), None);
    }
}
