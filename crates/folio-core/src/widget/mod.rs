//! Widget model: the content blocks that make up a resume.
//!
//! Every widget is a [`WidgetNode`] with a stable id, typed props for
//! one of the closed set of [`WidgetKind`]s, and a CSS-like style map.

mod node;
mod props;

pub use node::{WidgetId, WidgetNode};
pub use props::{
    BasicInfoProps, ExperienceTimeProps, ImageSectionProps, TextContentProps, TitleSectionProps,
    WidgetKind, WidgetProps,
};
