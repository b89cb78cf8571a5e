//! Widget kinds and their typed props.

use crate::error::WidgetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of widget kinds a document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    BasicInfo,
    TitleSection,
    ExperienceTime,
    TextContent,
    ImageSection,
}

impl WidgetKind {
    /// Every kind, in palette order.
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::BasicInfo,
        WidgetKind::TitleSection,
        WidgetKind::ExperienceTime,
        WidgetKind::TextContent,
        WidgetKind::ImageSection,
    ];

    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::BasicInfo => "BasicInfo",
            WidgetKind::TitleSection => "TitleSection",
            WidgetKind::ExperienceTime => "ExperienceTime",
            WidgetKind::TextContent => "TextContent",
            WidgetKind::ImageSection => "ImageSection",
        }
    }

    /// Human readable name for palettes and menus.
    pub fn label(&self) -> &'static str {
        match self {
            WidgetKind::BasicInfo => "Basic info",
            WidgetKind::TitleSection => "Title",
            WidgetKind::ExperienceTime => "Experience",
            WidgetKind::TextContent => "Text",
            WidgetKind::ImageSection => "Image",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| WidgetError::UnknownType(s.to_string()))
    }
}

/// Header block with the candidate's contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfoProps {
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar_url: Option<String>,
    /// Fields this version does not know, kept for saving.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Section heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleSectionProps {
    pub text: String,
    /// Fields this version does not know, kept for saving.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry on the experience timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceTimeProps {
    pub title: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    /// Fields this version does not know, kept for saving.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExperienceTimeProps {
    /// Date range as shown on the timeline ("2019 - Present").
    pub fn date_range(&self) -> String {
        match (self.start_date.is_empty(), self.end_date.is_empty()) {
            (true, true) => String::new(),
            (false, true) => format!("{} - Present", self.start_date),
            (true, false) => self.end_date.clone(),
            (false, false) => format!("{} - {}", self.start_date, self.end_date),
        }
    }
}

/// Free text paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContentProps {
    pub content: String,
    /// Fields this version does not know, kept for saving.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An embedded picture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSectionProps {
    pub url: String,
    pub alt: String,
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Fields this version does not know, kept for saving.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ImageSectionProps {
    /// Display size scaled to fit within the given bounds, preserving
    /// aspect ratio. Missing dimensions fall back to a 4:3 box.
    pub fn fit_within(&self, max_width: f32, max_height: f32) -> (f32, f32) {
        let width = self.width.filter(|w| *w > 0.0).unwrap_or(400.0);
        let height = self.height.filter(|h| *h > 0.0).unwrap_or(300.0);
        let scale = (max_width / width).min(max_height / height).min(1.0);
        (width * scale, height * scale)
    }
}

/// Typed props for each widget kind.
///
/// Matching on this enum is exhaustive, so a new kind cannot be added
/// without every renderer handling it.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetProps {
    BasicInfo(BasicInfoProps),
    TitleSection(TitleSectionProps),
    ExperienceTime(ExperienceTimeProps),
    TextContent(TextContentProps),
    ImageSection(ImageSectionProps),
}

impl WidgetProps {
    /// The kind tag of these props.
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetProps::BasicInfo(_) => WidgetKind::BasicInfo,
            WidgetProps::TitleSection(_) => WidgetKind::TitleSection,
            WidgetProps::ExperienceTime(_) => WidgetKind::ExperienceTime,
            WidgetProps::TextContent(_) => WidgetKind::TextContent,
            WidgetProps::ImageSection(_) => WidgetKind::ImageSection,
        }
    }

    /// Starter props used when a widget is added from the palette.
    pub fn placeholder(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::BasicInfo => WidgetProps::BasicInfo(BasicInfoProps {
                name: "Your Name".to_string(),
                job_title: "Job Title".to_string(),
                email: "name@example.com".to_string(),
                ..Default::default()
            }),
            WidgetKind::TitleSection => WidgetProps::TitleSection(TitleSectionProps {
                text: "Section Title".to_string(),
                ..Default::default()
            }),
            WidgetKind::ExperienceTime => WidgetProps::ExperienceTime(ExperienceTimeProps {
                title: "Position".to_string(),
                organization: "Company".to_string(),
                start_date: "2020".to_string(),
                ..Default::default()
            }),
            WidgetKind::TextContent => WidgetProps::TextContent(TextContentProps {
                content: "Describe yourself here.".to_string(),
                ..Default::default()
            }),
            WidgetKind::ImageSection => WidgetProps::ImageSection(ImageSectionProps::default()),
        }
    }

    /// Decode `propsData` for the given kind. `null` yields default props.
    pub fn from_value(kind: WidgetKind, value: serde_json::Value) -> Result<Self, WidgetError> {
        let value = if value.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            value
        };
        let invalid = |source| WidgetError::InvalidProps { kind, source };
        Ok(match kind {
            WidgetKind::BasicInfo => {
                WidgetProps::BasicInfo(serde_json::from_value(value).map_err(invalid)?)
            }
            WidgetKind::TitleSection => {
                WidgetProps::TitleSection(serde_json::from_value(value).map_err(invalid)?)
            }
            WidgetKind::ExperienceTime => {
                WidgetProps::ExperienceTime(serde_json::from_value(value).map_err(invalid)?)
            }
            WidgetKind::TextContent => {
                WidgetProps::TextContent(serde_json::from_value(value).map_err(invalid)?)
            }
            WidgetKind::ImageSection => {
                WidgetProps::ImageSection(serde_json::from_value(value).map_err(invalid)?)
            }
        })
    }

    /// Encode as `propsData`.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            WidgetProps::BasicInfo(p) => serde_json::to_value(p),
            WidgetProps::TitleSection(p) => serde_json::to_value(p),
            WidgetProps::ExperienceTime(p) => serde_json::to_value(p),
            WidgetProps::TextContent(p) => serde_json::to_value(p),
            WidgetProps::ImageSection(p) => serde_json::to_value(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tags() {
        for kind in WidgetKind::ALL {
            assert_eq!(kind.as_str().parse::<WidgetKind>().unwrap(), kind);
        }
        assert!(matches!(
            "Chart".parse::<WidgetKind>(),
            Err(WidgetError::UnknownType(tag)) if tag == "Chart"
        ));
    }

    #[test]
    fn test_null_props_default() {
        let props = WidgetProps::from_value(WidgetKind::TitleSection, json!(null)).unwrap();
        assert_eq!(props, WidgetProps::TitleSection(TitleSectionProps::default()));
    }

    #[test]
    fn test_invalid_props() {
        let err = WidgetProps::from_value(WidgetKind::TextContent, json!({ "content": 42 }))
            .unwrap_err();
        assert!(matches!(
            err,
            WidgetError::InvalidProps { kind: WidgetKind::TextContent, .. }
        ));
    }

    #[test]
    fn test_camel_case_fields() {
        let props = WidgetProps::from_value(
            WidgetKind::BasicInfo,
            json!({ "name": "Ada", "jobTitle": "Engineer" }),
        )
        .unwrap();
        let WidgetProps::BasicInfo(info) = props else {
            panic!("expected basic info");
        };
        assert_eq!(info.job_title, "Engineer");
        assert!(info.avatar_url.is_none());
    }

    #[test]
    fn test_unknown_fields_survive() {
        let value = json!({ "text": "Resume", "level": 2, "anchor": { "id": "top" } });
        let props = WidgetProps::from_value(WidgetKind::TitleSection, value.clone()).unwrap();
        let WidgetProps::TitleSection(title) = &props else {
            panic!("expected title");
        };
        assert_eq!(title.text, "Resume");
        assert_eq!(title.extra.get("level"), Some(&json!(2)));
        assert_eq!(props.to_value().unwrap(), value);
    }

    #[test]
    fn test_date_range() {
        let mut exp = ExperienceTimeProps {
            start_date: "2019".to_string(),
            ..Default::default()
        };
        assert_eq!(exp.date_range(), "2019 - Present");
        exp.end_date = "2022".to_string();
        assert_eq!(exp.date_range(), "2019 - 2022");
    }

    #[test]
    fn test_image_fit_within() {
        let image = ImageSectionProps {
            width: Some(800.0),
            height: Some(400.0),
            ..Default::default()
        };
        assert_eq!(image.fit_within(400.0, 400.0), (400.0, 200.0));
        // Never upscales
        assert_eq!(image.fit_within(1600.0, 1600.0), (800.0, 400.0));
    }
}
