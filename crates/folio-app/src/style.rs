//! Mapping of widget style data and emphasis onto egui frames.

use egui::{Color32, CornerRadius, Frame, Margin, Shadow, Stroke};
use folio_core::style::Sides;
use folio_core::{Emphasis, StyleData};
use folio_widgets::parse_css_color;

/// egui margins are i8; CSS lengths are clamped into that range.
fn to_margin(sides: Sides) -> Margin {
    let px = |v: f32| v.round().clamp(0.0, i8::MAX as f32) as i8;
    Margin {
        left: px(sides.left),
        right: px(sides.right),
        top: px(sides.top),
        bottom: px(sides.bottom),
    }
}

/// Frame for an item's content wrapper, built from its style data.
///
/// Understood properties: `padding*`, `margin*`, `backgroundColor`,
/// `borderRadius`, `borderWidth` + `borderColor`. Others are ignored.
pub fn wrapper_frame(style: &StyleData) -> Frame {
    let mut frame = Frame::new()
        .inner_margin(to_margin(style.padding()))
        .outer_margin(to_margin(style.margin()));

    if let Some(fill) = style.text("backgroundColor").and_then(parse_css_color) {
        frame = frame.fill(fill);
    }
    if let Some(radius) = style.length("borderRadius") {
        frame = frame.corner_radius(CornerRadius::same(radius.round().clamp(0.0, 255.0) as u8));
    }
    if let Some(width) = style.length("borderWidth") {
        let color = style
            .text("borderColor")
            .and_then(parse_css_color)
            .unwrap_or(Color32::from_gray(200));
        frame = frame.stroke(Stroke::new(width, color));
    }
    frame
}

/// Text color override from the `color` property.
pub fn text_color(style: &StyleData) -> Option<Color32> {
    style.text("color").and_then(parse_css_color)
}

/// egui shadow for an emphasis level.
pub fn emphasis_shadow(emphasis: Emphasis) -> Shadow {
    match emphasis.shadow() {
        Some(spec) => {
            let [r, g, b, a] = spec.rgba;
            Shadow {
                offset: [0, spec.offset_y],
                blur: spec.blur,
                spread: spec.spread,
                color: Color32::from_rgba_unmultiplied(r, g, b, a),
            }
        }
        None => Shadow::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_becomes_inner_margin() {
        let style = StyleData::new().with("padding", "4px");
        assert_eq!(wrapper_frame(&style).inner_margin, Margin::same(4));
    }

    #[test]
    fn test_background_and_text_color() {
        let style = StyleData::new()
            .with("backgroundColor", "#ffeedd")
            .with("color", "#111111");
        assert_eq!(wrapper_frame(&style).fill, Color32::from_rgb(255, 238, 221));
        assert_eq!(text_color(&style), Some(Color32::from_rgb(17, 17, 17)));
    }

    #[test]
    fn test_huge_padding_clamped() {
        let style = StyleData::new().with("padding", "500px");
        assert_eq!(wrapper_frame(&style).inner_margin, Margin::same(i8::MAX));
    }

    #[test]
    fn test_emphasis_shadow() {
        assert_eq!(emphasis_shadow(Emphasis::None), Shadow::NONE);
        assert_eq!(emphasis_shadow(Emphasis::Dragging).blur, 18);
        assert_eq!(emphasis_shadow(Emphasis::Selected).blur, 12);
    }
}
