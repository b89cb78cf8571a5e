//! A single entry in the ordered widget list, and its JSON wire form.

use super::props::{WidgetKind, WidgetProps};
use crate::error::{WidgetError, WidgetResult};
use crate::style::StyleData;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Opaque widget identifier, stable across reorders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One user-configurable content block in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetNode {
    pub id: WidgetId,
    pub props: WidgetProps,
    pub style: StyleData,
}

impl WidgetNode {
    /// Create a widget of the given kind with placeholder props.
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            id: WidgetId::new(),
            props: WidgetProps::placeholder(kind),
            style: StyleData::default(),
        }
    }

    /// Create a widget with explicit id and props.
    pub fn with_props(id: impl Into<WidgetId>, props: WidgetProps) -> Self {
        Self {
            id: id.into(),
            props,
            style: StyleData::default(),
        }
    }

    /// Set the wrapper style.
    pub fn with_style(mut self, style: StyleData) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> WidgetKind {
        self.props.kind()
    }

    /// Validate and decode one widget from its JSON form.
    ///
    /// Unknown `type` tags are rejected here rather than reaching a renderer.
    pub fn from_value(value: serde_json::Value) -> WidgetResult<Self> {
        let raw: RawWidgetNode = serde_json::from_value(value)?;
        raw.into_node()
    }

    /// Encode as `{ id, type, data: { propsData, styleData } }`.
    pub fn to_value(&self) -> WidgetResult<serde_json::Value> {
        Ok(serde_json::to_value(RawWidgetNode::from_node(self)?)?)
    }
}

/// JSON wire shape of a widget.
#[derive(Serialize, Deserialize)]
struct RawWidgetNode {
    id: WidgetId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: RawWidgetData,
}

#[derive(Default, Serialize, Deserialize)]
struct RawWidgetData {
    #[serde(rename = "propsData", default)]
    props_data: serde_json::Value,
    #[serde(rename = "styleData", default)]
    style_data: StyleData,
}

impl RawWidgetNode {
    fn into_node(self) -> WidgetResult<WidgetNode> {
        let kind: WidgetKind = self.kind.parse()?;
        let props = WidgetProps::from_value(kind, self.data.props_data)?;
        Ok(WidgetNode {
            id: self.id,
            props,
            style: self.data.style_data,
        })
    }

    fn from_node(node: &WidgetNode) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: node.id.clone(),
            kind: node.kind().as_str().to_string(),
            data: RawWidgetData {
                props_data: node.props.to_value()?,
                style_data: node.style.clone(),
            },
        })
    }
}

impl Serialize for WidgetNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawWidgetNode::from_node(self)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WidgetNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawWidgetNode::deserialize(deserializer)?
            .into_node()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::TitleSectionProps;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let node = WidgetNode::from_value(json!({
            "id": "w1",
            "type": "TitleSection",
            "data": { "propsData": { "text": "Resume" }, "styleData": { "padding": "4px" } }
        }))
        .unwrap();

        assert_eq!(node.id.as_str(), "w1");
        assert_eq!(
            node.props,
            WidgetProps::TitleSection(TitleSectionProps {
                text: "Resume".to_string(),
                ..Default::default()
            })
        );
        assert_eq!(node.style.text("padding"), Some("4px"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = WidgetNode::from_value(json!({
            "id": "w2",
            "type": "Chart",
            "data": { "propsData": {}, "styleData": {} }
        }));
        assert!(matches!(result, Err(WidgetError::UnknownType(tag)) if tag == "Chart"));
    }

    #[test]
    fn test_missing_data_uses_defaults() {
        let node = WidgetNode::from_value(json!({ "id": "w3", "type": "TextContent" })).unwrap();
        assert_eq!(node.kind(), WidgetKind::TextContent);
        assert!(node.style.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let node = WidgetNode::with_props(
            "w4",
            WidgetProps::TitleSection(TitleSectionProps {
                text: "Skills".to_string(),
                ..Default::default()
            }),
        );
        let value = node.to_value().unwrap();
        assert_eq!(value["type"], "TitleSection");
        assert_eq!(value["data"]["propsData"]["text"], "Skills");
        assert_eq!(value["data"]["styleData"], json!({}));
    }

    #[test]
    fn test_serde_impls_reject_unknown_type() {
        let json = r#"{ "id": "w5", "type": "Video", "data": {} }"#;
        let err = serde_json::from_str::<WidgetNode>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown widget type: Video"));
    }

    #[test]
    fn test_generated_ids_unique() {
        let a = WidgetNode::new(WidgetKind::TextContent);
        let b = WidgetNode::new(WidgetKind::TextContent);
        assert_ne!(a.id, b.id);
    }
}
