//! CSS-like style data attached to a widget's content wrapper.
//!
//! Style maps are kept exactly as they were ingested. Renderers read
//! the few properties they understand through the typed helpers here
//! and ignore the rest.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Pixels per `rem`/`em` unit.
const ROOT_FONT_SIZE: f32 = 16.0;

/// A single style value: a bare number, a CSS string, or any other
/// JSON value (booleans, `null`, nested values) carried untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Kept as a JSON number so integers stay integers.
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl StyleValue {
    /// Parse this value as a single CSS length in pixels.
    pub fn as_length(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => n.as_f64().map(|n| n as f32),
            StyleValue::Text(s) => parse_length(s),
            StyleValue::Other(_) => None,
        }
    }

    /// The raw string form, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<f64> for StyleValue {
    /// Non-finite numbers have no JSON form and become `null`.
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(n) => StyleValue::Number(n),
            None => StyleValue::Other(serde_json::Value::Null),
        }
    }
}

/// Per-side box lengths (padding, margin) in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sides {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Sides {
    /// Same length on every side.
    pub fn same(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expand a CSS box shorthand with one to four values.
    fn from_shorthand(values: &[f32]) -> Option<Self> {
        match *values {
            [all] => Some(Self::same(all)),
            [vertical, horizontal] => Some(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Some(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Some(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => None,
        }
    }
}

/// Style properties applied verbatim to a widget's content wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleData(BTreeMap<String, StyleValue>);

impl StyleData {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, property: &str, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property, replacing any previous value.
    pub fn insert(&mut self, property: &str, value: impl Into<StyleValue>) {
        self.0.insert(property.to_string(), value.into());
    }

    /// Get a property value.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A single length property in pixels.
    pub fn length(&self, property: &str) -> Option<f32> {
        self.get(property).and_then(StyleValue::as_length)
    }

    /// A string property such as a color.
    pub fn text(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(StyleValue::as_str)
    }

    /// Resolved padding: the `padding` shorthand overridden by any
    /// `paddingTop`/`paddingRight`/`paddingBottom`/`paddingLeft`.
    pub fn padding(&self) -> Sides {
        self.box_sides("padding")
    }

    /// Resolved margin, same rules as [`StyleData::padding`].
    pub fn margin(&self) -> Sides {
        self.box_sides("margin")
    }

    fn box_sides(&self, prefix: &str) -> Sides {
        let mut sides = match self.get(prefix) {
            Some(StyleValue::Text(s)) => {
                let values: Option<Vec<f32>> = s.split_whitespace().map(parse_length).collect();
                values
                    .and_then(|v| Sides::from_shorthand(&v))
                    .unwrap_or_default()
            }
            Some(value) => value.as_length().map(Sides::same).unwrap_or_default(),
            None => Sides::default(),
        };

        if let Some(v) = self.length(&format!("{prefix}Top")) {
            sides.top = v;
        }
        if let Some(v) = self.length(&format!("{prefix}Right")) {
            sides.right = v;
        }
        if let Some(v) = self.length(&format!("{prefix}Bottom")) {
            sides.bottom = v;
        }
        if let Some(v) = self.length(&format!("{prefix}Left")) {
            sides.left = v;
        }
        sides
    }
}

/// Parse a CSS length (`4px`, `4`, `1.5rem`, `2em`) into pixels.
pub fn parse_length(s: &str) -> Option<f32> {
    let s = s.trim();
    let (number, scale) = if let Some(n) = s.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = s.strip_suffix("rem") {
        (n, ROOT_FONT_SIZE)
    } else if let Some(n) = s.strip_suffix("em") {
        (n, ROOT_FONT_SIZE)
    } else {
        (s, 1.0)
    };
    number.trim().parse::<f32>().ok().map(|n| n * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("4px"), Some(4.0));
        assert_eq!(parse_length(" 12 "), Some(12.0));
        assert_eq!(parse_length("1.5rem"), Some(24.0));
        assert_eq!(parse_length("2em"), Some(32.0));
        assert_eq!(parse_length("auto"), None);
    }

    #[test]
    fn test_padding_shorthand() {
        let style = StyleData::new().with("padding", "4px");
        assert_eq!(style.padding(), Sides::same(4.0));

        let style = StyleData::new().with("padding", "4px 8px");
        assert_eq!(
            style.padding(),
            Sides {
                top: 4.0,
                right: 8.0,
                bottom: 4.0,
                left: 8.0
            }
        );
    }

    #[test]
    fn test_padding_side_overrides_shorthand() {
        let style = StyleData::new()
            .with("padding", "4px")
            .with("paddingLeft", 20.0);
        let padding = style.padding();
        assert_eq!(padding.left, 20.0);
        assert_eq!(padding.top, 4.0);
    }

    #[test]
    fn test_unparsable_padding_is_zero() {
        let style = StyleData::new().with("padding", "inherit");
        assert_eq!(style.padding(), Sides::default());
    }

    #[test]
    fn test_json_is_verbatim() {
        let json = serde_json::json!({ "padding": "4px", "opacity": 0.5, "color": "#111111" });
        let style: StyleData = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(style.len(), 3);
        assert_eq!(style.text("color"), Some("#111111"));
        assert_eq!(style.get("opacity"), Some(&StyleValue::from(0.5)));
        assert_eq!(serde_json::to_value(&style).unwrap(), json);
    }

    #[test]
    fn test_integer_and_non_css_values_kept() {
        let json = serde_json::json!({ "padding": 4, "hidden": false, "border": null });
        let style: StyleData = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(style.padding(), Sides::same(4.0));
        assert_eq!(style.length("hidden"), None);
        assert_eq!(serde_json::to_string(&style).unwrap(), r#"{"border":null,"hidden":false,"padding":4}"#);
        assert_eq!(serde_json::to_value(&style).unwrap(), json);
    }
}
